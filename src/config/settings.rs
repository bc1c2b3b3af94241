//! User settings for PET
//!
//! Manages display preferences: screen width for borders and banners, and the
//! column widths used when listing expenses.

use serde::{Deserialize, Serialize};

use super::paths::PetPaths;
use crate::error::PetError;

/// User settings for PET
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Width of borders and centered banners
    #[serde(default = "default_screen_width")]
    pub screen_width: usize,

    /// Column width of the date field in listings
    #[serde(default = "default_date_width")]
    pub date_width: usize,

    /// Column width of the category field; also the maximum category length
    #[serde(default = "default_category_width")]
    pub category_width: usize,

    /// Column width of the amount field in listings
    #[serde(default = "default_amount_width")]
    pub amount_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_screen_width() -> usize {
    100
}

fn default_date_width() -> usize {
    12
}

fn default_category_width() -> usize {
    15
}

fn default_amount_width() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            screen_width: default_screen_width(),
            date_width: default_date_width(),
            category_width: default_category_width(),
            amount_width: default_amount_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &PetPaths) -> Result<Self, PetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PetError::Config(format!("Failed to parse settings file: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PetPaths) -> Result<(), PetError> {
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| PetError::Io(format!("Failed to create base directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 100);
        assert_eq!(settings.category_width, 15);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            screen_width: 80,
            category_width: 20,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.screen_width, 80);
        assert_eq!(loaded.category_width, 20);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"screen_width": 60}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.screen_width, 60);
        assert_eq!(loaded.date_width, 12);
        assert_eq!(loaded.amount_width, 10);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, PetError::Config(_)));
    }
}
