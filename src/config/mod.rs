//! Configuration module for PET
//!
//! This module provides configuration management including:
//! - Data, log, and settings path resolution
//! - User display settings persistence

pub mod paths;
pub mod settings;

pub use paths::PetPaths;
pub use settings::Settings;
