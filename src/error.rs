//! Error types for popkit library.

use std::io;
use thiserror::Error;

/// Result type alias for popkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing tool output or running tools.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or spawning a process.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A key starting with `Page ` did not match `Page <number> <attribute>`.
    #[error("invalid page key {0:?}")]
    InvalidPageKey(String),

    /// A page size value did not match `<width> x <height> pts [<note>]`.
    #[error("parsing page size {0:?} failed")]
    InvalidPageSize(String),

    /// A numeric component of a page size could not be parsed.
    #[error("parsing {0:?} to float failed")]
    InvalidNumber(String),

    /// An external tool exited with a non-zero status.
    #[error("{program} failed with status {code} and stderr: {stderr}")]
    CommandFailed {
        /// Program that was executed
        program: String,
        /// Exit code, `-1` if the process was terminated by a signal
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPageKey("Page x size".to_string());
        assert_eq!(err.to_string(), "invalid page key \"Page x size\"");

        let err = Error::CommandFailed {
            program: "pdftoppm".to_string(),
            code: 1,
            stderr: "Syntax Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pdftoppm failed with status 1 and stderr: Syntax Error"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
