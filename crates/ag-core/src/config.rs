//! Site configuration: which pages exist and where they live

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a site configuration
#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A page the front-end can display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Path the page is registered under
    pub path: String,

    /// Title shown in the page header and menus
    pub title: String,

    /// Named sections (tabs) the page interprets from a trailing sub-path
    #[serde(default)]
    pub sections: Vec<String>,
}

impl PageDescriptor {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: &[&str]) -> Self {
        self.sections = sections.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The section named by the first segment of `sub_path`.
    ///
    /// An empty sub-path selects the first section.
    pub fn section(&self, sub_path: &str) -> Option<&str> {
        match sub_path.split('/').find(|s| !s.is_empty()) {
            Some(name) => self.sections.iter().find(|s| *s == name).map(String::as_str),
            None => self.sections.first().map(String::as_str),
        }
    }
}

/// Page shown for an error status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPageDescriptor {
    pub status: u16,
    pub title: String,
}

/// Configuration for the whole site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path opened on startup
    pub default_path: String,

    /// Pages registered in order
    pub pages: Vec<PageDescriptor>,

    /// Error pages by status
    pub error_pages: Vec<ErrorPageDescriptor>,

    /// Directory holding saved user settings
    pub settings_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_path: "courses".to_string(),
            pages: vec![
                PageDescriptor::new("courses", "Courses"),
                PageDescriptor::new("submissions", "Submissions")
                    .with_sections(&["pending", "graded", "all"]),
                PageDescriptor::new("results", "Grading Results"),
                PageDescriptor::new("settings", "Settings")
                    .with_sections(&["display", "account"]),
                PageDescriptor::new("admin/courses", "Manage Courses"),
                PageDescriptor::new("admin/users", "Manage Users"),
            ],
            error_pages: vec![
                ErrorPageDescriptor {
                    status: 404,
                    title: "Page Not Found".to_string(),
                },
                ErrorPageDescriptor {
                    status: 403,
                    title: "Access Denied".to_string(),
                },
            ],
            settings_dir: PathBuf::from(".autograder"),
        }
    }
}

impl SiteConfig {
    /// Read a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, SiteConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_not_found_page() {
        let config = SiteConfig::default();
        assert!(config.error_pages.iter().any(|p| p.status == 404));
        assert!(config.pages.iter().any(|p| p.path == config.default_path));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "default_path": "home",
                "pages": [{ "path": "home", "title": "Home" }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.default_path, "home");
        assert_eq!(config.pages, vec![PageDescriptor::new("home", "Home")]);
        assert_eq!(config.error_pages, SiteConfig::default().error_pages);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.json");
        std::fs::write(&file, r#"{ "settings_dir": "/tmp/ag" }"#).unwrap();

        let config = SiteConfig::load(&file).unwrap();
        assert_eq!(config.settings_dir, PathBuf::from("/tmp/ag"));

        let missing = SiteConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, SiteConfigError::Io { .. }));
    }

    #[test]
    fn test_section_from_sub_path() {
        let page = PageDescriptor::new("submissions", "Submissions").with_sections(&["pending", "graded"]);
        assert_eq!(page.section(""), Some("pending"));
        assert_eq!(page.section("graded"), Some("graded"));
        assert_eq!(page.section("graded/17"), Some("graded"));
        assert_eq!(page.section("archived"), None);
        assert_eq!(PageDescriptor::new("courses", "Courses").section(""), None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "pages": 5 }"#),
            Err(SiteConfigError::Parse(_))
        ));
    }
}
