//! Extractors: one document in, plain counts and tuples out
//!
//! Every extractor is a pure function of a parsed [`LattesDocument`].
//!
//! [`LattesDocument`]: lattes_parser::LattesDocument

pub mod activity;
pub mod advising;
pub mod areas;
pub mod committees;
pub mod engagement;
pub mod events;
pub mod publications;
pub mod summary;
pub mod tags;

pub use activity::{activity_areas, ActivityAreas, ACTIVITY_LEVELS};
pub use advising::{
    advising_counts, concluded_advising, in_progress_advising, AdvisingCounts, AdvisingLevel,
    LevelCounts,
};
pub use areas::{
    distinct_area_names, extract_areas, read_area, research_profile, sectioned_areas, AreaSection,
};
pub use committees::{committee_counts, CommitteeCounts};
pub use engagement::{engagement_counts, EngagementCounts};
pub use events::{congress_years, CongressYears, UNKNOWN_YEAR};
pub use publications::{
    article_count, article_impacts, article_summary, coauthors, ArticleImpact, ArticleSummary,
    UNKNOWN_AUTHOR,
};
pub use summary::{curriculum_summary, CurriculumSummary, SummaryTotals};
pub use tags::tag_inventory;
