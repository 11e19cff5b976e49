//! Presentation layer for marketing-analyst
//!
//! This crate contains CLI definitions, the console formatter, the
//! progress spinner, and the interactive REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputArg};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::QuerySpinner;
pub use repl::{AnalystRepl, ReplCommand};
