//! Batch loop over a directory of Lattes exports
//!
//! Files are processed one at a time: parsed, handed to the extractor and
//! dropped before the next one. A file that fails to parse is logged,
//! recorded as skipped, and the batch moves on.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use lattes_parser::LattesDocument;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{LattesError, LattesResult};

const XML_EXTENSION: &str = "xml";

/// A file left out of the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Extractor output for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Processed<T> {
    /// File name
    pub label: String,
    /// File name without extension
    pub stem: String,
    pub value: T,
}

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport<T> {
    pub items: Vec<Processed<T>>,
    pub skipped: Vec<SkippedFile>,
}

impl<T> BatchReport<T> {
    /// Files looked at, processed or not
    pub fn files_read(&self) -> usize {
        self.items.len() + self.skipped.len()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| &item.value)
    }
}

/// The `*.xml` files of one directory, in path order
#[derive(Debug, Clone)]
pub struct Batch {
    files: Vec<PathBuf>,
}

impl Batch {
    /// List `*.xml` files directly in `dir`, or anywhere below it when
    /// `recursive` is set
    pub fn scan(dir: impl AsRef<Path>, recursive: bool) -> LattesResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(LattesError::MissingDirectory(dir.to_path_buf()));
        }

        let mut files = if recursive {
            walk_xml_files(dir)?
        } else {
            glob_xml_files(dir)?
        };
        files.sort();

        info!(dir = %dir.display(), files = files.len(), recursive, "scanned directory");
        Ok(Self { files })
    }

    /// Batch over an explicit file list, kept in the given order
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Parse each file in turn and apply `extract` to it
    pub fn run<T, F>(&self, mut extract: F) -> BatchReport<T>
    where
        F: FnMut(&LattesDocument) -> T,
    {
        let mut report = BatchReport {
            items: Vec::with_capacity(self.files.len()),
            skipped: Vec::new(),
        };

        for path in &self.files {
            match LattesDocument::from_path(path) {
                Ok(doc) => {
                    debug!(file = %doc.label(), "processing");
                    let value = extract(&doc);
                    report.items.push(Processed {
                        label: doc.label().to_string(),
                        stem: doc.stem().to_string(),
                        value,
                    });
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping file");
                    report.skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            processed = report.items.len(),
            skipped = report.skipped.len(),
            "batch complete"
        );
        report
    }
}

fn glob_xml_files(dir: &Path) -> LattesResult<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*.{XML_EXTENSION}");

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| LattesError::scan(dir, e))? {
        let path = entry.map_err(|e| LattesError::scan(dir, e))?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn walk_xml_files(dir: &Path) -> LattesResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            LattesError::scan(path, e)
        })?;
        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new(XML_EXTENSION)) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
