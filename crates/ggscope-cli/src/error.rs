//! CLI-specific error types and exit codes.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more files produced a failure envelope. The envelopes have
    /// already been printed.
    #[error("{failed} of {total} file(s) could not be inspected")]
    Inspection { failed: usize, total: usize },

    /// Writing to stdout failed.
    #[error("IO error: {0}")]
    Io(String),

    /// An envelope could not be serialized.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: at least one file could not be inspected
    /// - 74: output could not be written (EX_IOERR)
    /// - 70: internal serialization failure (EX_SOFTWARE)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Inspection { .. } => 1,
            Self::Io(_) => 74,
            Self::Output(_) => 70,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Output(err.to_string())
        }
    }
}
