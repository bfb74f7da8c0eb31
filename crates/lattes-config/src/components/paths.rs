//! Input and output locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the reference CV, the candidate directory and the PDF report live
///
/// All optional in the file; the CLI fills gaps from its flags and reports
/// a missing value only for the commands that need it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Reference researcher for `similar`
    pub reference_path: Option<PathBuf>,
    /// Directory scanned for `*.xml` files
    pub candidate_dir: Option<PathBuf>,
    /// PDF report destination
    pub output_path: Option<PathBuf>,
    /// Descend into subdirectories of `candidate_dir`
    pub recursive: bool,
}

impl PathsConfig {
    /// Overlay values given on the command line
    pub fn merge(&mut self, overrides: PathsConfig) {
        if overrides.reference_path.is_some() {
            self.reference_path = overrides.reference_path;
        }
        if overrides.candidate_dir.is_some() {
            self.candidate_dir = overrides.candidate_dir;
        }
        if overrides.output_path.is_some() {
            self.output_path = overrides.output_path;
        }
        self.recursive |= overrides.recursive;
    }
}
