//! Path management for PET
//!
//! Every file the application touches is resolved here and handed to the
//! storage and logging layers explicitly.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit override (`--data-dir` flag or `PET_DATA_DIR` environment variable)
//! 2. Platform config directory (`~/.config/pet` on Linux, the equivalent
//!    application directory elsewhere)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PET_DATA_DIR";

/// Manages all paths used by PET
#[derive(Debug, Clone)]
pub struct PetPaths {
    /// Base directory for all PET files
    base_dir: PathBuf,
}

impl PetPaths {
    /// Create a new PetPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, PetError> {
        Self::resolve(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    /// Resolve paths from an optional explicit base directory
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, PetError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the log directory (`<base>/logs/`)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the expense records file
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.txt")
    }

    /// Get the path to the budget value file
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.txt")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("logs.txt")
    }

    /// Ensure the data and log directories exist
    pub fn ensure_directories(&self) -> Result<(), PetError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PetError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| PetError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, PetError> {
    ProjectDirs::from("", "", "pet")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PetError::Config("Could not determine a home directory".into()))
}
