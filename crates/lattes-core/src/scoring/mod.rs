//! Scorers: arithmetic over extracted counts

pub mod engagement;
pub mod experience;
pub mod production;
pub mod quality;
pub mod reputation;
pub mod similarity;
pub mod stats;

pub use engagement::engagement_score;
pub use experience::{advising_experience_score, quality_factor, SeniorityScore, SeniorityScorer};
pub use production::production_score;
pub use quality::{quality_score, quality_tiers, TierCounts};
pub use reputation::{reputation_scores, ReputationInput};
pub use similarity::{compare_areas, profile_score, rank, rank_candidates, FULL_MATCH, LEVEL_WEIGHTS};
pub use stats::{percentile, MinMax};
