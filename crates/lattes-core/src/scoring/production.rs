//! Scientific production

use lattes_config::ProductionConfig;

use crate::extract::ArticleImpact;

/// `Σ impact_factor * h_index * percentile` over the articles
pub fn production_score(impacts: &[ArticleImpact], config: &ProductionConfig) -> f64 {
    impacts
        .iter()
        .map(|a| a.impact_factor * config.h_index * a.percentile)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_score() {
        let impacts = [
            ArticleImpact {
                impact_factor: 2.0,
                percentile: 0.5,
            },
            ArticleImpact {
                impact_factor: 1.5,
                percentile: 1.0,
            },
        ];
        let score = production_score(&impacts, &ProductionConfig::default());
        assert!((score - 25.0).abs() < 1e-9);
        assert_eq!(production_score(&[], &ProductionConfig::default()), 0.0);
    }
}
