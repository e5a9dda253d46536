//! Application settings loading from medbay.toml
//!
//! The settings file is optional. When it is missing every setting takes its
//! default; when it exists it must parse.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "medbay.toml";

/// Configuration structure representing the entire medbay.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the medicine document lives; `MEDBAY_DATA_PATH` takes precedence
    pub data_path: Option<PathBuf>,
    /// Supply at or below which a medicine is flagged as running low
    pub low_supply_threshold: i64,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            low_supply_threshold: 3,
            log_filter: "info".to_string(),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Returns
/// * `Ok(Settings)` - Parsed settings, or defaults if the file does not exist
/// * `Err(Error)` - The file exists but cannot be read or parsed
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No settings file at {:?}, using defaults", path);
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads settings from the default location (./medbay.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings(DEFAULT_SETTINGS_PATH)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            data_path = "/var/lib/medbay/medicine.json"
            low_supply_threshold = 7
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.data_path,
            Some(PathBuf::from("/var/lib/medbay/medicine.json"))
        );
        assert_eq!(settings.low_supply_threshold, 7);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path().join("absent.toml"))?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medbay.toml");
        std::fs::write(&path, "low_supply_threshold = \"lots\"").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
