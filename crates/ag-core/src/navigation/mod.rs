use std::sync::Arc;
use thiserror::Error;

use crate::events::EventError;

mod manager;
mod path;
mod tree;

pub use manager::NavigationManager;
pub use path::NavPath;
pub use tree::{PageNode, Registry, Resolution};

/// Status used when a path does not resolve to a page
pub const NOT_FOUND: u16 = 404;

/// What a navigation ended on
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationTarget<P> {
    /// A page registered in the page tree
    Page(Arc<P>),
    /// A registered error page
    Error { status: u16, page: Arc<P> },
}

impl<P> NavigationTarget<P> {
    /// The page to display, whichever kind of target this is
    pub fn page(&self) -> &Arc<P> {
        match self {
            NavigationTarget::Page(page) => page,
            NavigationTarget::Error { page, .. } => page,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            NavigationTarget::Page(_) => None,
            NavigationTarget::Error { status, .. } => Some(*status),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NavigationTarget::Error { .. })
    }
}

/// Published once for every completed navigation attempt
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent<P> {
    target: NavigationTarget<P>,
    path: String,
    sub_path: String,
}

impl<P> NavigationEvent<P> {
    pub fn new(target: NavigationTarget<P>, path: impl Into<String>, sub_path: impl Into<String>) -> Self {
        Self {
            target,
            path: path.into(),
            sub_path: sub_path.into(),
        }
    }

    pub fn target(&self) -> &NavigationTarget<P> {
        &self.target
    }

    /// The path as it was requested
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Segments left over after the target page was reached, joined by `/`
    pub fn sub_path(&self) -> &str {
        &self.sub_path
    }
}

/// Mistakes in how pages were set up. These are developer errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot register the root itself as a page")]
    EmptyPath,

    #[error("cannot register `{path}`: `{page}` is a page and cannot hold children")]
    PageHasNoChildren { path: String, page: String },

    #[error("cannot register `{path}`: other pages are registered beneath it")]
    RegistryOccupied { path: String },

    #[error("no error page registered for status {0}")]
    MissingErrorPage(u16),
}

/// Errors returned by navigation calls
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("navigation event was delivered but subscribers failed: {0}")]
    Subscribers(#[from] EventError),
}
