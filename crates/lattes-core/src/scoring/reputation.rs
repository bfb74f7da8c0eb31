//! Reputation: committee work and co-authorship, normalized over the batch

use lattes_config::ReputationConfig;
use serde::Serialize;

use super::stats::MinMax;

/// Raw reputation inputs of one researcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReputationInput {
    /// Total banca participations
    pub committees: usize,
    /// Distinct author names across the researcher's articles
    pub coauthors: usize,
}

/// `committee_weight * norm(committees) + coauthor_weight * norm(coauthors)`
/// for each input, normalized against the whole slice
pub fn reputation_scores(inputs: &[ReputationInput], config: &ReputationConfig) -> Vec<f64> {
    let committees = MinMax::of(inputs.iter().map(|i| i.committees as f64));
    let coauthors = MinMax::of(inputs.iter().map(|i| i.coauthors as f64));
    let (Some(committees), Some(coauthors)) = (committees, coauthors) else {
        return Vec::new();
    };

    inputs
        .iter()
        .map(|input| {
            config.committee_weight * committees.normalize(input.committees as f64)
                + config.coauthor_weight * coauthors.normalize(input.coauthors as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(committees: usize, coauthors: usize) -> ReputationInput {
        ReputationInput {
            committees,
            coauthors,
        }
    }

    #[test]
    fn test_scores_span_zero_to_one() {
        let scores = reputation_scores(
            &[input(0, 10), input(10, 0), input(5, 5)],
            &ReputationConfig::default(),
        );
        assert_eq!(scores, vec![0.5, 0.5, 0.5]);

        let scores = reputation_scores(&[input(0, 0), input(4, 8)], &ReputationConfig::default());
        assert_eq!(scores, vec![0.0, 1.0]);
    }

    #[test]
    fn test_uniform_batch_scores_zero() {
        let scores = reputation_scores(&[input(3, 3), input(3, 3)], &ReputationConfig::default());
        assert_eq!(scores, vec![0.0, 0.0]);
        assert!(reputation_scores(&[], &ReputationConfig::default()).is_empty());
    }
}
