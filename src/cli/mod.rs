//! Interactive command-line layer
//!
//! The numbered main menu, console prompts, and the session that ties them to
//! storage.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::{format_menu, MenuChoice};
pub use session::Session;
