//! User display settings and where they are kept between sessions

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

mod store;

pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};

/// Key the display settings are stored under
pub const DISPLAY_SETTINGS_KEY: &str = "autograder.display-settings";

/// Errors from reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings under `{key}` are malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid settings key `{0}`")]
    InvalidKey(String),
}

/// How the front-end presents itself to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Whether to use dark mode
    pub dark_mode: bool,

    /// UI scale factor
    pub scale_factor: f32,

    /// Whether to show the navigation bar
    pub show_navigation_bar: bool,

    /// Rows per page in submission tables
    pub submissions_per_page: usize,

    /// Path opened on startup instead of the site default
    pub landing_page: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            scale_factor: 1.0,
            show_navigation_bar: true,
            submissions_per_page: 25,
            landing_page: None,
        }
    }
}

impl DisplaySettings {
    /// Load settings from `store`, falling back to defaults when none were saved
    pub fn load(store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        match store.load(DISPLAY_SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| SettingsError::Malformed {
                key: DISPLAY_SETTINGS_KEY.to_string(),
                source,
            }),
            None => {
                debug!("no saved display settings, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(self)?;
        store.save(DISPLAY_SETTINGS_KEY, &raw)
    }
}
