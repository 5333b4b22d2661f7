//! Navigation manager implementation

use super::{
    ConfigError, NavPath, NavigationError, NavigationEvent, NavigationTarget, Registry, Resolution,
    NOT_FOUND,
};
use crate::events::{EventBus, EventError, Handler};
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves paths against the registered page tree and announces every
/// navigation on its event bus
pub struct NavigationManager<P> {
    pages: Arc<RwLock<Registry<P>>>,
    error_pages: Arc<RwLock<AHashMap<u16, Arc<P>>>>,
    default_path: Arc<RwLock<Option<String>>>,
    events: EventBus<NavigationEvent<P>>,
}

impl<P> NavigationManager<P> {
    /// Create a manager with no pages, no error pages and no default path
    pub fn new() -> Self {
        Self {
            pages: Arc::new(RwLock::new(Registry::new())),
            error_pages: Arc::new(RwLock::new(AHashMap::new())),
            default_path: Arc::new(RwLock::new(None)),
            events: EventBus::new(),
        }
    }

    /// Bind a page at `path`. A page already bound at exactly this path is replaced.
    pub fn register_page(&self, path: &str, page: P) -> Result<(), ConfigError> {
        let parsed = NavPath::parse(path);
        let previous = self.pages.write().insert(&parsed, Arc::new(page))?;
        if previous.is_some() {
            debug!(path = %parsed, "replaced page");
        } else {
            debug!(path = %parsed, "registered page");
        }
        Ok(())
    }

    /// Bind the page shown for `status`, replacing any previous one
    pub fn register_error_page(&self, status: u16, page: P) {
        self.error_pages.write().insert(status, Arc::new(page));
        debug!(status, "registered error page");
    }

    pub fn set_default_path(&self, path: &str) {
        *self.default_path.write() = Some(path.to_string());
    }

    pub fn default_path(&self) -> Option<String> {
        self.default_path.read().clone()
    }

    /// Walk the page tree without publishing anything
    pub fn resolve(&self, path: &str) -> Resolution<P> {
        self.pages.read().resolve(&NavPath::parse(path))
    }

    /// Paths of all registered pages, in registration order
    pub fn registered_paths(&self) -> Vec<NavPath> {
        self.pages.read().page_paths()
    }

    /// Navigate to `path` and publish the resulting event.
    ///
    /// A path with no page behind it navigates to the 404 page; that page
    /// missing is a configuration error and nothing is published.
    pub fn navigate_to(&self, path: &str) -> Result<NavigationEvent<P>, NavigationError> {
        let event = match self.resolve(path) {
            Resolution::Found { page, sub_path } => {
                info!(path, sub_path = %sub_path, "navigating");
                NavigationEvent::new(NavigationTarget::Page(page), path, sub_path.to_string())
            }
            Resolution::Missing => {
                warn!(path, "no page registered for path");
                self.error_event(NOT_FOUND, path)?
            }
        };
        self.dispatch(event)
    }

    /// Navigate to the default path, or to the root when none was set
    pub fn navigate_to_default(&self) -> Result<NavigationEvent<P>, NavigationError> {
        let default_path = self.default_path();
        match default_path {
            Some(path) => self.navigate_to(&path),
            None => {
                warn!("no default path set");
                self.navigate_to("")
            }
        }
    }

    /// Show the error page for `status` without walking the page tree
    pub fn navigate_to_error(&self, status: u16) -> Result<NavigationEvent<P>, NavigationError> {
        info!(status, "navigating to error page");
        let event = self.error_event(status, "")?;
        self.dispatch(event)
    }

    pub fn subscribe(&self, handler: Handler<NavigationEvent<P>>) {
        self.events.subscribe(handler);
    }

    pub fn unsubscribe(&self, handler: &Handler<NavigationEvent<P>>) -> Result<(), EventError> {
        self.events.unsubscribe(handler)
    }

    fn error_event(&self, status: u16, path: &str) -> Result<NavigationEvent<P>, ConfigError> {
        let page = self
            .error_pages
            .read()
            .get(&status)
            .cloned()
            .ok_or(ConfigError::MissingErrorPage(status))?;
        Ok(NavigationEvent::new(NavigationTarget::Error { status, page }, path, ""))
    }

    /// Publish with no lock held, so subscribers may call back into the manager
    fn dispatch(&self, event: NavigationEvent<P>) -> Result<NavigationEvent<P>, NavigationError> {
        self.events.publish(&event)?;
        Ok(event)
    }
}

impl<P> Default for NavigationManager<P> {
    fn default() -> Self {
        Self::new()
    }
}
