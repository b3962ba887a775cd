//! User settings for FinTrack
//!
//! Display preferences and the confirmation window for destructive actions.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for FinTrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format (strftime), rendered in local time
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Seconds a "clear all" confirmation stays armed
    #[serde(default = "default_clear_confirm_secs")]
    pub clear_confirm_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%-d %b %Y, %H:%M".to_string()
}

fn default_clear_confirm_secs() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            clear_confirm_secs: default_clear_confirm_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Defaults are not written; the caller decides when to persist.
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        read_json(paths.settings_file())
            .map_err(|e| FintrackError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.clear_confirm_secs, 3);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "$".into(),
            clear_confirm_secs: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let json = r#"{"currency_symbol": "€"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.date_format, default_date_format());
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "nope").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(FintrackError::Config(_))
        ));
    }
}
