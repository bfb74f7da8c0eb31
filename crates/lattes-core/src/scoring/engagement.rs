//! Academic engagement

use lattes_config::EngagementConfig;

use crate::extract::EngagementCounts;

/// Weighted sum of teaching, research and extension counts
pub fn engagement_score(counts: &EngagementCounts, config: &EngagementConfig) -> f64 {
    config.teaching_weight * counts.teaching as f64
        + config.research_weight * counts.research as f64
        + config.extension_weight * counts.extension as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let counts = EngagementCounts {
            teaching: 5,
            research: 2,
            extension: 4,
        };
        let score = engagement_score(&counts, &EngagementConfig::default());
        assert!((score - 3.6).abs() < 1e-9);
    }
}
