//! Core error types

use std::path::PathBuf;

use lattes_parser::ParseError;
use thiserror::Error;

/// Errors raised by extraction, batch scanning and ID counting
#[derive(Debug, Error)]
pub enum LattesError {
    /// A document could not be read or is not well-formed XML
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The directory to scan does not exist or is not a directory
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Filesystem error while listing files
    #[error("failed to scan {}: {message}", path.display())]
    Scan {
        /// Directory or entry being listed
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Malformed or unreadable CSV file
    #[error("failed to read CSV {}: {source}", path.display())]
    Csv {
        /// CSV file
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

/// Specialized Result type for core operations
pub type LattesResult<T> = Result<T, LattesError>;

impl LattesError {
    /// Create a scan error
    pub fn scan(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether the error concerns a single document, so a batch can skip it
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_per_file() {
        let err: LattesError = ParseError::EmptyDocument {
            label: "cv.xml".to_string(),
        }
        .into();
        assert!(err.is_per_file());
        assert_eq!(err.to_string(), "no root element in cv.xml");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let err = LattesError::MissingDirectory(PathBuf::from("curriculos"));
        assert!(!err.is_per_file());
        assert_eq!(err.to_string(), "directory not found: curriculos");
    }
}
