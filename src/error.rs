//! Error types for the table shell.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Syntax error. Could not parse statement '{0}'.")]
    SyntaxError(String),

    #[error("Unrecognized command '{0}'.")]
    UnrecognizedCommand(String),

    #[error("String is too long for column '{column}' (max {max} bytes).")]
    StringTooLong { column: &'static str, max: usize },

    #[error("Line exceeds {max} bytes.")]
    LineTooLong { max: usize },

    #[error("Table full.")]
    CapacityExceeded,

    #[error("Row {row_num} out of range (table holds {num_rows} rows).")]
    OutOfRange { row_num: usize, num_rows: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Statement-level errors are reported and the session moves on to the
    /// next line. Anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
