//! Configuration file support
//!
//! Loads settings from ~/.levython-highlight.toml (or
//! %USERPROFILE%\.levython-highlight.toml on Windows)
//!
//! Example:
//! ```toml
//! # levython-highlight configuration
//! enabled = true
//! class-prefix = "lv-"
//! marker-class = "highlighted"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HighlightError, Result};

const CONFIG_FILE_NAME: &str = ".levython-highlight.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Whether highlighting runs at all
    pub enabled: bool,
    /// Prepended to category names in rendered class attributes
    pub class_prefix: String,
    /// Class added to a code element once it has been highlighted
    pub marker_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            class_prefix: String::new(),
            marker_class: "highlighted".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Class names end up inside attribute values unescaped
    fn validate(&self) -> Result<()> {
        if !is_class_name(&self.class_prefix) {
            return Err(HighlightError::InvalidSetting(format!(
                "class-prefix {:?} contains characters not allowed in a class name",
                self.class_prefix
            )));
        }
        if self.marker_class.is_empty() || !is_class_name(&self.marker_class) {
            return Err(HighlightError::InvalidSetting(format!(
                "marker-class {:?} is not a valid class name",
                self.marker_class
            )));
        }
        Ok(())
    }
}

fn is_class_name(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
enabled = false
class-prefix = "lv-"
marker-class = "done"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.class_prefix, "lv-");
        assert_eq!(config.marker_class, "done");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::parse("class-prefix = \"x_\"").unwrap();
        assert!(config.enabled);
        assert_eq!(config.marker_class, "highlighted");
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::parse("enabled = maybe"),
            Err(HighlightError::Config(_))
        ));
        assert!(matches!(
            Config::parse("enabled = \"yes\""),
            Err(HighlightError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_class_names() {
        assert!(matches!(
            Config::parse("class-prefix = 'a\" onload=\"x'"),
            Err(HighlightError::InvalidSetting(_))
        ));
        assert!(matches!(
            Config::parse("marker-class = ''"),
            Err(HighlightError::InvalidSetting(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enabled = false").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.marker_class, "highlighted");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
