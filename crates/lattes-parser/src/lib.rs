//! Lattes XML Parser
//!
//! Loads Lattes curriculum exports into an in-memory element tree.
//! This crate provides:
//! - A well-formedness checking reader built on `quick-xml`
//! - Encoding detection from the XML declaration (Lattes exports are ISO-8859-1)
//! - ElementTree-style queries (`find_all`, `find_path`, `child`) over the tree

pub mod document;
pub mod element;
pub mod error;
mod reader;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use document::LattesDocument;
pub use element::{Descendants, XmlElement};
pub use error::{ParseError, ParseResult};
