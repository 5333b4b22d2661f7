//! Application context built once at startup

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::{PageDescriptor, SiteConfig};
use crate::navigation::{ConfigError, NavigationManager};
use crate::settings::{DisplaySettings, SettingsError, SettingsStore};

/// Everything the front-end shell needs, passed by reference instead of globals
pub struct AppContext {
    /// The navigation manager
    pub navigation: Arc<NavigationManager<PageDescriptor>>,

    /// Current display settings
    pub settings: Arc<RwLock<DisplaySettings>>,

    /// Where display settings are saved
    pub settings_store: Arc<dyn SettingsStore>,
}

impl AppContext {
    /// Register every configured page and pick the startup path.
    ///
    /// A saved landing page takes precedence over the site default. Settings
    /// that cannot be read are replaced by defaults.
    pub fn bootstrap(config: &SiteConfig, settings_store: Arc<dyn SettingsStore>) -> Result<Self, ConfigError> {
        let navigation = NavigationManager::new();

        for page in &config.pages {
            navigation.register_page(&page.path, page.clone())?;
        }
        for error_page in &config.error_pages {
            navigation.register_error_page(
                error_page.status,
                PageDescriptor::new(error_page.status.to_string(), error_page.title.clone()),
            );
        }

        let settings = DisplaySettings::load(settings_store.as_ref()).unwrap_or_else(|err| {
            warn!("ignoring saved display settings: {err}");
            DisplaySettings::default()
        });

        let default_path = settings
            .landing_page
            .clone()
            .unwrap_or_else(|| config.default_path.clone());
        navigation.set_default_path(&default_path);

        info!(
            pages = config.pages.len(),
            error_pages = config.error_pages.len(),
            default_path = %default_path,
            "application context ready"
        );

        Ok(Self {
            navigation: Arc::new(navigation),
            settings: Arc::new(RwLock::new(settings)),
            settings_store,
        })
    }

    /// Snapshot of the current display settings
    pub fn settings(&self) -> DisplaySettings {
        self.settings.read().clone()
    }

    /// Change the display settings and save them.
    ///
    /// The change only takes effect once it has been saved.
    pub fn update_settings(&self, update: impl FnOnce(&mut DisplaySettings)) -> Result<DisplaySettings, SettingsError> {
        let mut settings = self.settings.write();
        let mut updated = settings.clone();
        update(&mut updated);
        updated.save(self.settings_store.as_ref())?;
        *settings = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationTarget, NOT_FOUND};
    use crate::settings::MemorySettingsStore;

    /// Reads nothing and refuses every write
    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Result<Option<String>, SettingsError> {
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), SettingsError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_bootstrap_registers_site() {
        let context = AppContext::bootstrap(&SiteConfig::default(), Arc::new(MemorySettingsStore::new())).unwrap();

        let event = context.navigation.navigate_to_default().unwrap();
        assert_eq!(event.target().page().title, "Courses");

        let event = context.navigation.navigate_to("submissions/graded").unwrap();
        assert_eq!(event.target().page().section(event.sub_path()), Some("graded"));

        let event = context.navigation.navigate_to("grades/unknown").unwrap();
        assert_eq!(event.target().status(), Some(NOT_FOUND));
        assert_eq!(event.target().page().title, "Page Not Found");

        let event = context.navigation.navigate_to_error(403).unwrap();
        assert!(matches!(event.target(), NavigationTarget::Error { status: 403, .. }));
    }

    #[test]
    fn test_landing_page_overrides_default() {
        let store = Arc::new(MemorySettingsStore::new());
        DisplaySettings {
            landing_page: Some("results".to_string()),
            ..DisplaySettings::default()
        }
        .save(store.as_ref())
        .unwrap();

        let context = AppContext::bootstrap(&SiteConfig::default(), store).unwrap();
        assert_eq!(context.navigation.default_path().as_deref(), Some("results"));
    }

    #[test]
    fn test_conflicting_pages_fail_bootstrap() {
        let config = SiteConfig {
            pages: vec![
                PageDescriptor::new("courses", "Courses"),
                PageDescriptor::new("courses/42", "Course 42"),
            ],
            ..SiteConfig::default()
        };

        let result = AppContext::bootstrap(&config, Arc::new(MemorySettingsStore::new()));
        assert!(matches!(result, Err(ConfigError::PageHasNoChildren { .. })));
    }

    #[test]
    fn test_update_settings_persists() {
        let store = Arc::new(MemorySettingsStore::new());
        let context = AppContext::bootstrap(&SiteConfig::default(), store.clone()).unwrap();

        let updated = context.update_settings(|s| s.dark_mode = true).unwrap();
        assert!(updated.dark_mode);
        assert!(context.settings().dark_mode);
        assert!(DisplaySettings::load(store.as_ref()).unwrap().dark_mode);
    }

    #[test]
    fn test_failed_save_keeps_previous_settings() {
        let context = AppContext::bootstrap(&SiteConfig::default(), Arc::new(ReadOnlyStore)).unwrap();

        let result = context.update_settings(|s| s.dark_mode = true);
        assert!(matches!(result, Err(SettingsError::Io(_))));
        assert_eq!(context.settings(), DisplaySettings::default());
    }
}
