//! Advising completion quality

use lattes_config::QualityConfig;
use serde::Serialize;

use crate::extract::AdvisingCounts;

/// Concluded and in-progress advising of one tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TierCounts {
    pub concluded: usize,
    pub in_progress: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.concluded + self.in_progress
    }

    /// `concluded / total`, 0 for an empty tier
    pub fn completion_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.concluded as f64 / total as f64,
        }
    }
}

/// Tiers in weight order: undergraduate research (iniciação científica),
/// master's, doctorate
pub fn quality_tiers(counts: &AdvisingCounts) -> [TierCounts; 3] {
    let tier = |concluded, in_progress| TierCounts {
        concluded,
        in_progress,
    };
    [
        tier(
            counts.concluded.iniciacao_cientifica,
            counts.in_progress.iniciacao_cientifica,
        ),
        tier(counts.concluded.mestrado, counts.in_progress.mestrado),
        tier(counts.concluded.doutorado, counts.in_progress.doutorado),
    ]
}

/// `Σ weight * rate * concluded / total` over the non-empty tiers
pub fn quality_score(counts: &AdvisingCounts, config: &QualityConfig) -> f64 {
    quality_tiers(counts)
        .iter()
        .zip(config.weights)
        .filter(|(tier, _)| tier.total() > 0)
        .map(|(tier, weight)| {
            weight * tier.completion_rate() * tier.concluded as f64 / tier.total() as f64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LevelCounts;

    #[test]
    fn test_quality_score() {
        let counts = AdvisingCounts {
            concluded: LevelCounts {
                iniciacao_cientifica: 1,
                graduacao: 9,
                mestrado: 2,
                doutorado: 0,
            },
            in_progress: LevelCounts {
                iniciacao_cientifica: 1,
                graduacao: 0,
                mestrado: 0,
                doutorado: 3,
            },
        };
        // IC: 1 * 0.5 * 1/2 = 0.25, mestrado: 2 * 1 * 2/2 = 2, doutorado: 3 * 0 = 0
        let score = quality_score(&counts, &QualityConfig::default());
        assert!((score - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_tiers_score_zero() {
        assert_eq!(quality_score(&AdvisingCounts::default(), &QualityConfig::default()), 0.0);
        assert_eq!(TierCounts::default().completion_rate(), 0.0);
    }
}
