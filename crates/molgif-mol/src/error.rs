//! Error types for molecule loading.

use thiserror::Error;

/// Errors that can occur while reading or building a molecule.
#[derive(Error, Debug)]
pub enum MolError {
    /// Coordinate file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed coordinate record.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Error message.
        message: String,
    },

    /// Element symbol missing from the periodic table.
    #[error("unknown element: {0}")]
    UnknownElement(String),

    /// No atoms were supplied.
    #[error("no atoms found")]
    Empty,
}

impl MolError {
    /// Create a parse error at a specific line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        MolError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for molecule operations.
pub type Result<T> = std::result::Result<T, MolError>;
