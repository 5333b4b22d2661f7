//! Page tree: registries of segments leading to terminal pages

use std::sync::Arc;
use indexmap::IndexMap;

use super::{ConfigError, NavPath};

/// A node of the page tree
#[derive(Debug)]
pub enum PageNode<P> {
    /// Terminal page supplied by the caller
    Page(Arc<P>),
    /// Internal node holding child segments
    Registry(Registry<P>),
}

/// Outcome of walking the tree for a path
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<P> {
    /// A page was reached; `sub_path` holds the segments it did not consume
    Found { page: Arc<P>, sub_path: NavPath },
    /// No page is bound along this path
    Missing,
}

/// Mapping from path segment to child node
#[derive(Debug)]
pub struct Registry<P> {
    children: IndexMap<String, PageNode<P>>,
}

impl<P> Registry<P> {
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Bind `page` at `path`, creating intermediate registries.
    ///
    /// Returns the page previously bound at exactly this path, if any.
    pub fn insert(&mut self, path: &NavPath, page: Arc<P>) -> Result<Option<Arc<P>>, ConfigError> {
        let (last, parents) = path.segments().split_last().ok_or(ConfigError::EmptyPath)?;

        let mut node = self;
        for (depth, segment) in parents.iter().enumerate() {
            let child = node
                .children
                .entry(segment.clone())
                .or_insert_with(|| PageNode::Registry(Registry::new()));
            node = match child {
                PageNode::Registry(registry) => registry,
                PageNode::Page(_) => {
                    return Err(ConfigError::PageHasNoChildren {
                        path: path.to_string(),
                        page: path.prefix(depth + 1).to_string(),
                    });
                }
            };
        }

        if matches!(node.children.get(last), Some(PageNode::Registry(registry)) if !registry.is_empty()) {
            return Err(ConfigError::RegistryOccupied {
                path: path.to_string(),
            });
        }

        match node.children.insert(last.clone(), PageNode::Page(page)) {
            Some(PageNode::Page(previous)) => Ok(Some(previous)),
            _ => Ok(None),
        }
    }

    /// Walk the tree segment by segment.
    ///
    /// Stops at the first page reached, even with segments left over.
    /// An unknown segment, or running out of segments on a registry, is a miss.
    pub fn resolve(&self, path: &NavPath) -> Resolution<P> {
        let mut node = self;
        for (index, segment) in path.segments().iter().enumerate() {
            match node.children.get(segment) {
                None => return Resolution::Missing,
                Some(PageNode::Page(page)) => {
                    return Resolution::Found {
                        page: page.clone(),
                        sub_path: path.suffix(index + 1),
                    };
                }
                Some(PageNode::Registry(registry)) => node = registry,
            }
        }
        Resolution::Missing
    }

    /// Paths of every registered page, in registration order
    pub fn page_paths(&self) -> Vec<NavPath> {
        let mut paths = Vec::new();
        self.collect_paths(&NavPath::default(), &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &NavPath, out: &mut Vec<NavPath>) {
        for (segment, node) in &self.children {
            let path = prefix.child(segment);
            match node {
                PageNode::Page(_) => out.push(path),
                PageNode::Registry(registry) => registry.collect_paths(&path, out),
            }
        }
    }
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}
