//! Parser error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a Lattes XML document
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to open or read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The XML is not well-formed
    #[error("malformed XML in {label} at byte {position}: {message}")]
    Syntax {
        /// Document label (file name)
        label: String,
        /// Byte offset reported by the reader
        position: u64,
        /// Reader message
        message: String,
    },

    /// The document ended while an element was still open
    #[error("unclosed element <{element}> in {label}")]
    UnclosedElement {
        /// Document label (file name)
        label: String,
        /// Innermost element left open
        element: String,
    },

    /// A second top-level element follows the root
    #[error("unexpected second root element <{element}> in {label}")]
    MultipleRoots {
        /// Document label (file name)
        label: String,
        /// Name of the extra element
        element: String,
    },

    /// The document has no root element at all
    #[error("no root element in {label}")]
    EmptyDocument {
        /// Document label (file name)
        label: String,
    },
}

/// Specialized Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Create a syntax error
    pub fn syntax(label: impl Into<String>, position: u64, message: impl ToString) -> Self {
        Self::Syntax {
            label: label.into(),
            position,
            message: message.to_string(),
        }
    }

    /// Whether the file itself was unreadable, as opposed to malformed
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
