//! Budget value persistence
//!
//! The budget file holds a single number formatted with two decimal places.

use std::path::Path;

use crate::error::PetResult;
use crate::logger::Logger;
use crate::validate::parse_budget;

use super::file_io::{read_text_optional, write_text_atomic};

/// Load the budget, falling back to zero
///
/// A missing file is logged as a warning. Unreadable, non-numeric, or
/// negative content is logged as an error.
pub fn load_budget(path: &Path, logger: &Logger) -> f64 {
    let contents = match read_text_optional(path) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            logger.warning(format!("Budget File not found - {}", path.display()));
            return 0.0;
        }
        Err(e) => {
            logger.error(format!("Error loading budget: {}", e));
            return 0.0;
        }
    };

    if let Some(budget) = parse_budget(&contents) {
        return budget;
    }

    match contents.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => logger.error(format!(
            "Negative budget value {} in {}",
            value,
            path.display()
        )),
        _ => logger.error("Invalid budget data"),
    }
    0.0
}

/// Overwrite the budget file with `budget` rounded to two decimals
pub fn save_budget(budget: f64, path: &Path, logger: &Logger) -> PetResult<()> {
    match write_text_atomic(path, &format!("{:.2}", budget)) {
        Ok(()) => {
            logger.info("Budget saved successfully");
            Ok(())
        }
        Err(e) => {
            logger.error(format!("Error saving budget: {}", e));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Logger) {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new(temp_dir.path().join("logs.txt"));
        (temp_dir, logger)
    }

    fn log_contents(logger: &Logger) -> String {
        fs::read_to_string(logger.path()).unwrap_or_default()
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let (temp_dir, logger) = setup();
        let budget = load_budget(&temp_dir.path().join("budget.txt"), &logger);

        assert_eq!(budget, 0.0);
        assert!(log_contents(&logger).contains("WARNING: Budget File not found - "));
    }

    #[test]
    fn test_invalid_content_defaults_to_zero() {
        let (temp_dir, logger) = setup();
        let path = temp_dir.path().join("budget.txt");
        fs::write(&path, "a lot").unwrap();

        assert_eq!(load_budget(&path, &logger), 0.0);
        assert!(log_contents(&logger).contains("ERROR: Invalid budget data"));
    }

    #[test]
    fn test_negative_value_defaults_to_zero_with_its_own_message() {
        let (temp_dir, logger) = setup();
        let path = temp_dir.path().join("budget.txt");
        fs::write(&path, "-25.00").unwrap();

        assert_eq!(load_budget(&path, &logger), 0.0);

        let log = log_contents(&logger);
        assert!(log.contains("ERROR: Negative budget value -25 in "));
        assert!(!log.contains("Invalid budget data"));
    }

    #[test]
    fn test_save_then_load() {
        let (temp_dir, logger) = setup();
        let path = temp_dir.path().join("budget.txt");

        save_budget(42.5, &path, &logger).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "42.50");
        assert_eq!(load_budget(&path, &logger), 42.50);
        assert!(log_contents(&logger).contains("INFORMATION: Budget saved successfully"));
    }

    #[test]
    fn test_save_rounds_to_cents() {
        let (temp_dir, logger) = setup();
        let path = temp_dir.path().join("budget.txt");

        save_budget(99.999, &path, &logger).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "100.00");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let (temp_dir, logger) = setup();
        let path = temp_dir.path().join("budget.txt");
        fs::write(&path, "  250.00\n").unwrap();

        assert_eq!(load_budget(&path, &logger), 250.0);
        assert_eq!(log_contents(&logger), "");
    }
}
