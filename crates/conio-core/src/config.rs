//! Configuration for conio.
//!
//! User-level settings are stored in `~/.conio/config.yaml`:
//!
//! ```yaml
//! color: auto   # always | never | auto
//! ```
//!
//! A missing file is not an error; defaults are used instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::ColorMode;
use crate::errors::{ConsoleError, Result};

/// User-level console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Color output mode (always/never/auto). Default: auto.
    #[serde(default)]
    pub color: ColorMode,
}

impl ConsoleConfig {
    /// Load the configuration from the default location (`~/.conio/config.yaml`).
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidConfig`] if the file exists but cannot be parsed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::warn!("Could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from a specific path.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidConfig`] if the file exists but cannot
    /// be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ConsoleError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ConsoleError::InvalidConfig(msg) => {
                ConsoleError::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse the configuration from YAML text. Empty text yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| ConsoleError::InvalidConfig(format!("Failed to parse: {}", e)))
    }

    /// Get the default config directory (`~/.conio`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".conio"))
    }

    /// Get the default config file path (`~/.conio/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        Self::default_dir().map(|d| d.join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        assert_eq!(ConsoleConfig::default().color, ColorMode::Auto);
    }

    #[test]
    fn test_config_from_yaml() {
        let config = ConsoleConfig::from_yaml("color: never\n").unwrap();
        assert_eq!(config.color, ColorMode::Never);

        let config = ConsoleConfig::from_yaml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(matches!(
            ConsoleConfig::from_yaml("color: rainbow\n"),
            Err(ConsoleError::InvalidConfig(_))
        ));
        assert!(matches!(
            ConsoleConfig::from_yaml("colour: never\n"),
            Err(ConsoleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let temp = TempDir::new().expect("create temp dir");
        let config = ConsoleConfig::from_path(&temp.path().join("missing.yaml")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_config_from_file() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("config.yaml");
        let mut file = fs::File::create(&path).expect("create config");
        writeln!(file, "color: always").expect("write config");

        let config = ConsoleConfig::from_path(&path).unwrap();
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_config_invalid_file_names_path() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("config.yaml");
        fs::write(&path, "color: [1, 2]\n").expect("write config");

        let err = ConsoleConfig::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("config.yaml"));
    }
}
