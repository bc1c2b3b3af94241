use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pet_cli::cli::Session;
use pet_cli::config::{PetPaths, Settings};
use pet_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pet",
    version,
    about = "PET - Personal Expense Tracker",
    long_about = "PET records dated expenses in a plain text file and compares \
                  what you have spent against a budget, all from an interactive \
                  terminal menu."
)]
struct Cli {
    /// Directory holding data, logs, and settings
    #[arg(long, env = "PET_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (the default)
    Run,

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file for editing
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PetPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command {
        None | Some(Commands::Run) => {
            let storage = Storage::new(paths)?;
            let stdin = io::stdin();
            let mut session = Session::load(storage, settings, stdin.lock(), io::stdout());
            session.run().context("PET stopped unexpectedly")?;
        }
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }

            println!("PET Configuration");
            println!("=================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Screen width:   {}", settings.screen_width);
            println!("  Date width:     {}", settings.date_width);
            println!("  Category width: {}", settings.category_width);
            println!("  Amount width:   {}", settings.amount_width);
        }
    }

    Ok(())
}
