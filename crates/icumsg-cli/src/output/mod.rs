//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::CliError;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a render diagnostic as a warning on stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
