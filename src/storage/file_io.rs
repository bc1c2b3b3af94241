//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PetError;

/// Path of the scratch file written before the atomic rename
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("pet"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), PetError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                PetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);

    remove_on_error(&temp_path, || {
        let file = File::create(&temp_path)
            .map_err(|e| PetError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| PetError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| PetError::Storage(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| PetError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| PetError::Storage(format!("Failed to rename temp file: {}", e)))
    })
}

/// Run `write`, deleting `temp_path` if any step fails
fn remove_on_error<F>(temp_path: &Path, write: F) -> Result<(), PetError>
where
    F: FnOnce() -> Result<(), PetError>,
{
    write().map_err(|e| {
        let _ = fs::remove_file(temp_path);
        e
    })
}

/// Read a whole text file, returning `None` if it doesn't exist
pub fn read_text_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>, PetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| PetError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert_eq!(read_text_optional(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.txt");

        write_text_atomic(&path, "42.50").unwrap();
        assert_eq!(read_text_optional(&path).unwrap().as_deref(), Some("42.50"));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "first\nsecond\n").unwrap();
        write_text_atomic(&path, "third\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "third\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "data").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.txt.tmp").exists());
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().join("expenses.txt.tmp");

        let result = remove_on_error(&temp_path, || {
            fs::write(&temp_path, "partial").unwrap();
            Err(PetError::Storage("Failed to sync data: disk full".into()))
        });

        assert!(result.is_err());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("occupied");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner"), "x").unwrap();

        assert!(write_text_atomic(&dir, "data").is_err());
        assert!(!temp_dir.path().join("occupied.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("budget.txt");

        write_text_atomic(&path, "0.00").unwrap();
        assert!(path.exists());
    }
}
