use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use ahash::AHashMap;
use parking_lot::RwLock;

use super::SettingsError;

/// Key-value storage for serialized settings
pub trait SettingsStore: Send + Sync {
    /// Value saved under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Save `value` under `key`, replacing what was there
    fn save(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Keeps each key in its own `<key>.json` file inside a directory
pub struct FileSettingsStore {
    dir: PathBuf,
}

impl FileSettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<PathBuf, SettingsError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            && !key.starts_with('.');
        if !valid {
            return Err(SettingsError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let file = self.file_for(key)?;
        match std::fs::read_to_string(&file) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let file = self.file_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(file, value)?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Default)]
pub struct MemorySettingsStore {
    values: RwLock<AHashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DisplaySettings, DISPLAY_SETTINGS_KEY};

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("nested"));

        assert_eq!(store.load(DISPLAY_SETTINGS_KEY).unwrap(), None);

        let settings = DisplaySettings {
            scale_factor: 1.5,
            ..DisplaySettings::default()
        };
        settings.save(&store).unwrap();

        assert!(dir.path().join("nested/autograder.display-settings.json").exists());
        assert_eq!(DisplaySettings::load(&store).unwrap(), settings);
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.save(key, "{}"), Err(SettingsError::InvalidKey(_))));
        }
    }
}
