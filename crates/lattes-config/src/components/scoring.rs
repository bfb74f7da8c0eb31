//! Weights and constants for the advisor scores

use serde::{Deserialize, Serialize};

/// Advising experience weights
///
/// `weights` and `durations` are indexed by level: iniciação científica,
/// graduação, mestrado, doutorado. `percentile`, `level_weights` and `caps`
/// drive the publication-adjusted experience score (graduação, mestrado,
/// doutorado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    pub weights: [f64; 4],
    /// Typical duration of each advising level, in years
    pub durations: [f64; 4],
    /// Percentile of batch article counts taken as the productivity ceiling
    pub percentile: f64,
    pub level_weights: [f64; 3],
    /// Experience that earns the full level weight
    pub caps: [f64; 3],
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            weights: [1.0, 2.0, 3.0, 4.0],
            durations: [1.0, 1.0, 2.0, 4.0],
            percentile: 90.0,
            level_weights: [4.0, 6.0, 10.0],
            caps: [50.0, 30.0, 20.0],
        }
    }
}

/// Completion-quality tier weights: undergraduate research, master's, doctorate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub weights: [f64; 3],
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            weights: [1.0, 2.0, 3.0],
        }
    }
}

/// Reputation mix of normalized committee and co-author counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationConfig {
    pub committee_weight: f64,
    pub coauthor_weight: f64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            committee_weight: 0.5,
            coauthor_weight: 0.5,
        }
    }
}

/// Engagement mix of teaching, research and extension activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    pub teaching_weight: f64,
    pub research_weight: f64,
    pub extension_weight: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            teaching_weight: 0.4,
            research_weight: 0.4,
            extension_weight: 0.2,
        }
    }
}

/// Scientific production
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionConfig {
    /// h-index applied to every researcher; Lattes exports do not carry one
    pub h_index: f64,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self { h_index: 10.0 }
    }
}
