//! Core of the auto-grading front-end
//!
//! This crate provides the page router, the event bus it announces
//! navigations on, and the startup context tying them to site
//! configuration and saved user settings.

pub mod config;
pub mod context;
pub mod events;
pub mod navigation;
pub mod settings;

// Re-export commonly used types
pub use config::{ErrorPageDescriptor, PageDescriptor, SiteConfig, SiteConfigError};
pub use context::AppContext;
pub use events::{handler_from_fn, EventBus, EventError, EventHandler, Handler};
pub use navigation::{
    ConfigError, NavPath, NavigationError, NavigationEvent, NavigationManager,
    NavigationTarget, Resolution, NOT_FOUND,
};
pub use settings::{DisplaySettings, FileSettingsStore, MemorySettingsStore, SettingsError, SettingsStore};
