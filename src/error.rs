//! Error types for the assent library.
//!
//! All fallible operations return [`AssentError`] through the crate-wide
//! [`Result`] alias. Tokenization, similarity and classification are total
//! and never produce one; only corpus synthesis, configuration loading and
//! report I/O can fail.
//!
//! # Examples
//!
//! ```
//! use assent::error::{AssentError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AssentError::invalid_argument("seed phrase set is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::corpus::LabeledExample;

/// The main error type for assent operations.
#[derive(Error, Debug)]
pub enum AssentError {
    /// I/O errors (report files, lexicon files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller supplied an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration content is structurally valid but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// The report could not be written; the classified examples are kept
    #[error("I/O error writing report: {source}")]
    ReportWrite {
        #[source]
        source: io::Error,
        examples: Vec<LabeledExample>,
    },

    /// A report line could not be parsed back into an example
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AssentError.
pub type Result<T> = std::result::Result<T, AssentError>;

impl AssentError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AssentError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AssentError::Config(msg.into())
    }

    /// Examples classified before a failed report write, if any.
    pub fn examples(&self) -> Option<&[LabeledExample]> {
        match self {
            AssentError::ReportWrite { examples, .. } => Some(examples),
            _ => None,
        }
    }

    /// Create a new parse error for the given 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        AssentError::Parse {
            line,
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AssentError::invalid_argument("seed phrase set is empty");
        assert_eq!(
            error.to_string(),
            "Invalid argument: seed phrase set is empty"
        );

        let error = AssentError::config("no affirmative terms");
        assert_eq!(error.to_string(), "Configuration error: no affirmative terms");

        let error = AssentError::parse(3, "missing separator");
        assert_eq!(error.to_string(), "Parse error at line 3: missing separator");
    }

    #[test]
    fn test_report_write_error_keeps_examples() {
        use crate::classification::Classification;

        let error = AssentError::ReportWrite {
            source: io::Error::new(io::ErrorKind::NotFound, "missing directory"),
            examples: vec![LabeledExample::new("启动吧", Classification::Affirmative)],
        };
        assert_eq!(
            error.to_string(),
            "I/O error writing report: missing directory"
        );
        assert_eq!(error.examples().map(|examples| examples.len()), Some(1));
        assert!(AssentError::config("x").examples().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let assent_error = AssentError::from(io_error);

        match assent_error {
            AssentError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
