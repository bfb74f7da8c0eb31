//! Lattes Core
//!
//! Domain types, extractors and scorers for Lattes CV exports, plus the
//! batch loop the reports share.
//!
//! - [`extract`]: pure functions from a parsed document to counts and tuples
//! - [`scoring`]: similarity cascade and the advisor scores
//! - [`batch`]: directory scan and log-and-skip processing

pub mod batch;
pub mod error;
pub mod extract;
pub mod ids;
pub mod scoring;
pub mod tally;
pub mod types;

pub use batch::{Batch, BatchReport, Processed, SkippedFile};
pub use error::{LattesError, LattesResult};
pub use ids::count_ids;
pub use tally::{Tally, TallyEntry};
pub use types::{KnowledgeArea, ResearchProfile, ScoreResult};

// Re-exported so callers need a single dependency
pub use lattes_config as config;
pub use lattes_parser as parser;
