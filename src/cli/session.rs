//! Interactive menu session
//!
//! Owns the in-memory ledger and the current budget for the lifetime of the
//! program and dispatches the five menu options. Generic over its input and
//! output so tests can script a whole session.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_border, format_expense_table, format_header, format_title};
use crate::error::{PetError, PetResult};
use crate::models::Expense;
use crate::services::{compare_budget, ExpenseLedger};
use crate::storage::Storage;
use crate::validate::{parse_amount, parse_budget, parse_date};

use super::menu::{format_menu, MenuChoice};
use super::prompt::{pause, prompt_string, prompt_until};

/// Farewell printed when the session ends
pub const FAREWELL: &str = "Thank you for using PET!!!";

/// A running menu session
pub struct Session<R, W> {
    storage: Storage,
    settings: Settings,
    ledger: ExpenseLedger,
    budget: f64,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with expenses and budget loaded from storage
    pub fn load(storage: Storage, settings: Settings, input: R, output: W) -> Self {
        let ledger = ExpenseLedger::from_loaded(storage.load_expenses());
        let budget = storage.load_budget();

        Self {
            storage,
            settings,
            ledger,
            budget,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Unsaved expenses are written before returning, including when the
    /// loop stops on an error.
    pub fn run(&mut self) -> PetResult<()> {
        match self.menu_loop() {
            Ok(()) => Ok(()),
            Err(e) if e.is_input_closed() => self.exit(),
            Err(e) => {
                // A failed flush is logged by storage; report the loop's error
                let _ = self.ledger.flush(&self.storage);
                Err(e)
            }
        }
    }

    fn menu_loop(&mut self) -> PetResult<()> {
        loop {
            let header = format_header(self.ledger.total(), self.budget, self.settings.screen_width);
            write!(self.output, "{}\n{}", header, format_menu())?;
            writeln!(self.output, "{}", format_border(self.settings.screen_width))?;

            let answer = self.prompt("Enter your choice: ")?;
            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::AddExpense) => self.add_expense()?,
                Ok(MenuChoice::ViewExpenses) => self.view_expenses()?,
                Ok(MenuChoice::TrackBudget) => self.track_budget()?,
                Ok(MenuChoice::SaveExpenses) => self.save_expenses()?,
                Ok(MenuChoice::Exit) => return self.exit(),
                Err(_) => writeln!(self.output, "\nInvalid choice. Please try again.\n")?,
            }
        }
    }

    fn add_expense(&mut self) -> PetResult<()> {
        write!(
            self.output,
            "{}",
            format_title("PET - Add Expense", self.settings.screen_width)
        )?;

        let date = prompt_until(
            &mut self.input,
            &mut self.output,
            "Enter date (YYYY-MM-DD): ",
            |s| parse_date(s).ok_or_else(|| "Invalid date format. Please try again.".to_string()),
        )?;

        let max_len = self.settings.category_width;
        let category_prompt = format!(
            "Enter category (e.g., Food, Travel - max {} characters) : ",
            max_len
        );
        let category = prompt_until(&mut self.input, &mut self.output, &category_prompt, |s| {
            let category: String = s.chars().take(max_len).collect();
            text_field(category.trim(), "Category")
        })?;

        let amount = prompt_until(&mut self.input, &mut self.output, "Enter amount: ", |s| {
            parse_amount(s).ok_or_else(|| "Invalid amount. Please try again.".to_string())
        })?;

        let description = prompt_until(
            &mut self.input,
            &mut self.output,
            "Enter description: ",
            |s| text_field(s, "Description"),
        )?;

        let expense = Expense::new(date, category, amount, description)
            .map_err(|e| PetError::Validation(e.to_string()))?;
        writeln!(self.output, "Expense added successfully. {}", expense)?;
        self.ledger.add(expense);

        self.pause()
    }

    fn view_expenses(&mut self) -> PetResult<()> {
        write!(
            self.output,
            "{}",
            format_expense_table(self.ledger.expenses(), &self.settings)
        )?;
        self.pause()
    }

    fn track_budget(&mut self) -> PetResult<()> {
        writeln!(self.output, "Current budget amount is : {:.2}", self.budget)?;

        let answer = self.prompt("Enter new budget: ")?;
        if !answer.is_empty() {
            match parse_budget(&answer) {
                Some(budget) => self.budget = budget,
                None => writeln!(
                    self.output,
                    "Invalid budget. Keeping current budget of {:.2}.",
                    self.budget
                )?,
            }
        }

        let status = compare_budget(self.budget, self.ledger.total());
        writeln!(self.output, "\n{}", status)?;

        if let Err(e) = self.storage.save_budget(self.budget) {
            writeln!(self.output, "Failed to save budget: {}", e)?;
        }

        self.pause()
    }

    fn save_expenses(&mut self) -> PetResult<()> {
        match self.ledger.save(&self.storage) {
            Ok(()) => writeln!(self.output, "Expenses saved.")?,
            Err(e) => writeln!(self.output, "Failed to save expenses: {}", e)?,
        }
        self.pause()
    }

    fn exit(&mut self) -> PetResult<()> {
        if let Err(e) = self.ledger.flush(&self.storage) {
            writeln!(self.output, "Failed to save expenses: {}", e)?;
        }
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> PetResult<String> {
        prompt_string(&mut self.input, &mut self.output, prompt)
    }

    fn pause(&mut self) -> PetResult<()> {
        pause(&mut self.input, &mut self.output)
    }
}

/// Accept a non-empty text field that can be stored without a delimiter clash
fn text_field(value: &str, field: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty. Please try again.", field));
    }
    if value.contains(',') {
        return Err(format!("{} cannot contain a comma. Please try again.", field));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PetPaths;
    use std::fs;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    fn run_script(temp_dir: &TempDir, script: &str) -> (ExpenseLedger, f64, String) {
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let mut output = Vec::new();

        let (ledger, budget) = {
            let mut session = Session::load(
                storage,
                Settings::default(),
                Cursor::new(script.to_string()),
                &mut output,
            );
            session.run().unwrap();
            (session.ledger().clone(), session.budget())
        };

        (ledger, budget, String::from_utf8(output).unwrap())
    }

    fn expenses_file(temp_dir: &TempDir) -> std::path::PathBuf {
        PetPaths::with_base_dir(temp_dir.path().to_path_buf()).expenses_file()
    }

    #[test]
    fn test_exit_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, budget, output) = run_script(&temp_dir, "5\n");

        assert!(ledger.is_empty());
        assert_eq!(budget, 0.0);
        assert!(output.contains("PET - Personal Expense Tracker"));
        assert!(output.ends_with("Thank you for using PET!!!\n"));
        assert!(!expenses_file(&temp_dir).exists());
    }

    #[test]
    fn test_add_expense_with_retries_and_save_on_exit() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n\
                      2024-02-30\n2024-02-10\n\
                      \nFood\n\
                      zero\n0\n12.50\n\
                      \nLunch\n\
                      \n\
                      5\n";
        let (ledger, _, output) = run_script(&temp_dir, script);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 12.5);
        assert!(!ledger.is_dirty());
        assert!(output.contains("Invalid date format. Please try again."));
        assert!(output.contains("Category cannot be empty. Please try again."));
        assert_eq!(output.matches("Invalid amount. Please try again.").count(), 2);
        assert!(output.contains("Description cannot be empty. Please try again."));
        assert!(output.contains("Expense added successfully. 2024-02-10 | Food | 12.50 | Lunch"));

        let saved = fs::read_to_string(expenses_file(&temp_dir)).unwrap();
        assert_eq!(saved, "2024-02-10,Food,12.5,Lunch\n");
    }

    #[test]
    fn test_category_is_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n2024-01-01\nAn extremely long category\n3\nThing\n\n5\n";
        let (ledger, _, _) = run_script(&temp_dir, script);

        assert_eq!(ledger.expenses()[0].category, "An extremely lo");
    }

    #[test]
    fn test_view_lists_loaded_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let path = expenses_file(&temp_dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "2024-01-05,Books,20,Novel\n2024-01-06,Food,5,Tea\n").unwrap();

        let (ledger, _, output) = run_script(&temp_dir, "2\n\n5\n");

        assert_eq!(ledger.len(), 2);
        assert!(output.contains("Total Expenses: 2 items"));
        assert!(output.contains("Budget: 0.00 | Total Expenses: 25.00 | Overspend: 25.00"));
    }

    #[test]
    fn test_track_budget_updates_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let (_, budget, output) = run_script(&temp_dir, "3\n100\n\n5\n");

        assert_eq!(budget, 100.0);
        assert!(output.contains("You have 100.00 left in your budget"));

        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(fs::read_to_string(paths.budget_file()).unwrap(), "100.00");
    }

    #[test]
    fn test_track_budget_keeps_value_on_empty_or_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let (_, budget, output) = run_script(&temp_dir, "3\n80\n\n3\n\n\n3\n-4\n\n5\n");

        assert_eq!(budget, 80.0);
        assert!(output.contains("Invalid budget. Keeping current budget of 80.00."));
    }

    #[test]
    fn test_save_option_clears_dirty_flag() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n2024-03-03\nTravel\n4.20\nBus\n\n4\n\n5\n";
        let (ledger, _, output) = run_script(&temp_dir, script);

        assert!(output.contains("Expenses saved."));
        assert!(!ledger.is_dirty());
        assert!(expenses_file(&temp_dir).exists());
    }

    #[test]
    fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let (_, _, output) = run_script(&temp_dir, "9\n5\n");

        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_end_of_input_flushes_unsaved_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let (_, _, output) = run_script(&temp_dir, "1\n2024-03-03\nTravel\n4.20\nBus\n");

        assert!(output.ends_with("Thank you for using PET!!!\n"));
        let saved = fs::read_to_string(expenses_file(&temp_dir)).unwrap();
        assert_eq!(saved, "2024-03-03,Travel,4.2,Bus\n");
    }

    /// Output that breaks once a given prompt is written
    struct BrokenOutput {
        written: Vec<u8>,
        fail_on: &'static str,
    }

    impl Write for BrokenOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains(self.fail_on) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_still_flushes_unsaved_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let output = BrokenOutput {
            written: Vec::new(),
            fail_on: "Press Enter",
        };

        let mut session = Session::load(
            storage,
            Settings::default(),
            Cursor::new("1\n2024-03-05\nFood\n6\nSoup\n\n5\n".to_string()),
            output,
        );
        let err = session.run().unwrap_err();

        assert!(matches!(err, PetError::Io(_)));
        assert!(!session.ledger().is_dirty());
        let saved = fs::read_to_string(expenses_file(&temp_dir)).unwrap();
        assert_eq!(saved, "2024-03-05,Food,6,Soup\n");
    }
}
