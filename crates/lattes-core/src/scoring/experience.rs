//! Advising experience scores

use lattes_config::ExperienceConfig;
use serde::Serialize;

use super::stats::percentile;
use crate::extract::{AdvisingCounts, AdvisingLevel, LevelCounts};

/// Duration-weighted mean of advising experience
///
/// `Σ weight * duration * experience / total experience` over the four
/// levels; 0 for a researcher with no advising at all.
pub fn advising_experience_score(counts: &AdvisingCounts, config: &ExperienceConfig) -> f64 {
    let experience = counts.experience();
    let total = experience.total();
    if total == 0 {
        return 0.0;
    }

    let weighted: f64 = AdvisingLevel::ALL
        .iter()
        .enumerate()
        .map(|(i, level)| config.weights[i] * config.durations[i] * experience.get(*level) as f64)
        .sum();
    weighted / total as f64
}

/// Productivity ratio `articles / p_max`; 0 when the ceiling is 0
pub fn quality_factor(articles: usize, p_max: f64) -> f64 {
    if p_max == 0.0 {
        0.0
    } else {
        articles as f64 / p_max
    }
}

/// Publication-adjusted experience of one researcher
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeniorityScore {
    pub articles: usize,
    pub graduacao: usize,
    pub mestrado: usize,
    pub doutorado: usize,
    pub quality_factor: f64,
    pub score: f64,
}

/// Scores researchers against a productivity ceiling taken from the batch
#[derive(Debug, Clone)]
pub struct SeniorityScorer<'a> {
    config: &'a ExperienceConfig,
    p_max: f64,
}

impl<'a> SeniorityScorer<'a> {
    /// Ceiling is the configured percentile of the batch article counts
    pub fn for_batch(article_counts: &[usize], config: &'a ExperienceConfig) -> Self {
        let values: Vec<f64> = article_counts.iter().map(|&n| n as f64).collect();
        let p_max = percentile(&values, config.percentile).unwrap_or(0.0);
        Self { config, p_max }
    }

    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    /// `(grad * w0 / cap0 + mestrado * w1 / cap1 + doutorado * w2 / cap2) * Q`
    ///
    /// Graduação here is TCC advising; iniciação científica does not count.
    pub fn score(&self, experience: &LevelCounts, articles: usize) -> SeniorityScore {
        let q = quality_factor(articles, self.p_max);
        let levels = [
            experience.graduacao,
            experience.mestrado,
            experience.doutorado,
        ];
        let raw: f64 = levels
            .iter()
            .zip(self.config.level_weights.iter().zip(self.config.caps.iter()))
            .map(|(&count, (&weight, &cap))| count as f64 * weight / cap)
            .sum();

        SeniorityScore {
            articles,
            graduacao: experience.graduacao,
            mestrado: experience.mestrado,
            doutorado: experience.doutorado,
            quality_factor: q,
            score: raw * q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(concluded: [usize; 4], in_progress: [usize; 4]) -> AdvisingCounts {
        let level = |[iniciacao_cientifica, graduacao, mestrado, doutorado]: [usize; 4]| LevelCounts {
            iniciacao_cientifica,
            graduacao,
            mestrado,
            doutorado,
        };
        AdvisingCounts {
            concluded: level(concluded),
            in_progress: level(in_progress),
        }
    }

    #[test]
    fn test_advising_experience_score() {
        // experience = [1, 1, 1, 1]: (1*1 + 2*1 + 3*2 + 4*4) / 4
        let c = counts([1, 0, 1, 0], [0, 1, 0, 1]);
        let score = advising_experience_score(&c, &ExperienceConfig::default());
        assert!((score - 25.0 / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_advising_scores_zero() {
        let score = advising_experience_score(&AdvisingCounts::default(), &ExperienceConfig::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_quality_factor_guards_zero_ceiling() {
        assert_eq!(quality_factor(5, 0.0), 0.0);
        assert_eq!(quality_factor(5, 10.0), 0.5);
    }

    #[test]
    fn test_seniority_score() {
        let config = ExperienceConfig::default();
        // p90 of [0, 10] is 9.0
        let scorer = SeniorityScorer::for_batch(&[0, 10], &config);
        assert!((scorer.p_max() - 9.0).abs() < 1e-9);

        let experience = LevelCounts {
            iniciacao_cientifica: 7,
            graduacao: 5,
            mestrado: 3,
            doutorado: 2,
        };
        let result = scorer.score(&experience, 9);
        // (5*4/50 + 3*6/30 + 2*10/20) * 1.0 = 0.4 + 0.6 + 1.0
        assert!((result.score - 2.0).abs() < 1e-9);
        assert!((result.quality_factor - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_seniority_with_empty_batch() {
        let config = ExperienceConfig::default();
        let scorer = SeniorityScorer::for_batch(&[], &config);
        assert_eq!(scorer.score(&LevelCounts::default(), 3).score, 0.0);
    }
}
