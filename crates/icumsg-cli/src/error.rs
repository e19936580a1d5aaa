//! Errors that abort a command.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A failure outside the templates themselves.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// An input file could not be read.
    #[error("cannot read '{}'", path.display())]
    #[diagnostic(code(icumsg::io))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON output could not be produced.
    #[error("failed to serialize JSON output")]
    #[diagnostic(code(icumsg::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ReadFile { .. } => exitcode::NOINPUT,
            CliError::Json(_) => exitcode::SOFTWARE,
        }
    }
}
