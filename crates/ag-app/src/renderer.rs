//! Console stand-in for the page renderer

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::debug;

use ag_core::{DisplaySettings, EventHandler, NavigationEvent, NavigationTarget, PageDescriptor};

/// Prints the page each navigation lands on
pub struct ConsoleRenderer {
    settings: Arc<RwLock<DisplaySettings>>,
}

impl ConsoleRenderer {
    pub fn new(settings: Arc<RwLock<DisplaySettings>>) -> Self {
        Self { settings }
    }

    /// The line shown for a navigation event
    pub fn render_line(&self, event: &NavigationEvent<PageDescriptor>) -> String {
        let theme = if self.settings.read().dark_mode { "dark" } else { "light" };
        let page = event.target().page();
        match event.target() {
            NavigationTarget::Error { status, .. } if event.path().is_empty() => {
                format!("[{theme}] {status} {}", page.title)
            }
            NavigationTarget::Error { status, .. } => {
                format!("[{theme}] {status} {} ({})", page.title, event.path())
            }
            NavigationTarget::Page(_) => match page.section(event.sub_path()) {
                Some(section) => format!("[{theme}] {} > {section}", page.title),
                None if event.sub_path().is_empty() => format!("[{theme}] {}", page.title),
                None => format!("[{theme}] {} (unknown section `{}`)", page.title, event.sub_path()),
            },
        }
    }
}

impl EventHandler<NavigationEvent<PageDescriptor>> for ConsoleRenderer {
    fn handle(&self, event: &NavigationEvent<PageDescriptor>) -> anyhow::Result<()> {
        debug!(path = event.path(), "rendering");
        println!("{}", self.render_line(event));
        Ok(())
    }
}
