//! Loaded Lattes documents

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::element::XmlElement;
use crate::error::{ParseError, ParseResult};
use crate::reader::build_tree;

/// A fully parsed Lattes CV
///
/// The label is the file name the document was loaded from (or the label
/// passed to [`LattesDocument::parse_str`]); reports identify documents by it.
#[derive(Debug, Clone)]
pub struct LattesDocument {
    label: String,
    path: Option<PathBuf>,
    root: XmlElement,
}

impl LattesDocument {
    /// Read and parse a file
    pub fn from_path(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut document = Self::parse_bytes(label, &bytes)?;
        document.path = Some(path.to_path_buf());
        debug!(
            file = %document.label,
            elements = document.root.descendants().count() + 1,
            "parsed document"
        );
        Ok(document)
    }

    /// Parse an in-memory UTF-8 document
    pub fn parse_str(label: impl Into<String>, xml: &str) -> ParseResult<Self> {
        Self::parse_bytes(label, xml.as_bytes())
    }

    /// Parse raw bytes, honoring the encoding named in the XML declaration
    pub fn parse_bytes(label: impl Into<String>, bytes: &[u8]) -> ParseResult<Self> {
        let label = label.into();
        let root = build_tree(&label, bytes)?;
        Ok(Self {
            label,
            path: None,
            root,
        })
    }

    /// File name (or caller-supplied label)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label without its extension, used as the researcher name in reports
    pub fn stem(&self) -> &str {
        match self.label.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.label,
        }
    }

    /// Source path when loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Root element (`CURRICULO-VITAE` in real exports)
    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}
