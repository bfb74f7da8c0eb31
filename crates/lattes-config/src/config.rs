//! Top-level configuration

use serde::{Deserialize, Serialize};

use crate::components::{
    EngagementConfig, ExperienceConfig, PathsConfig, ProductionConfig, QualityConfig,
    ReputationConfig, SimilarityConfig,
};
use crate::loader::ConfigError;

/// Everything a `lattes.toml` can set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LattesConfig {
    pub paths: PathsConfig,
    pub similarity: SimilarityConfig,
    pub experience: ExperienceConfig,
    pub quality: QualityConfig,
    pub reputation: ReputationConfig,
    pub engagement: EngagementConfig,
    pub production: ProductionConfig,
}

impl LattesConfig {
    /// Reject values no report can work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.similarity.sections.is_empty() {
            return Err(ConfigError::invalid(
                "similarity.sections",
                "at least one section is required",
            ));
        }

        let percentile = self.experience.percentile;
        if !(0.0..=100.0).contains(&percentile) {
            return Err(ConfigError::invalid(
                "experience.percentile",
                format!("{percentile} is outside 0..=100"),
            ));
        }

        let bad_cap = self
            .experience
            .caps
            .iter()
            .find(|cap| !(cap.is_finite() && **cap > 0.0));
        if let Some(cap) = bad_cap {
            return Err(ConfigError::invalid(
                "experience.caps",
                format!("caps must be positive, got {cap}"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_is_valid() {
        assert!(LattesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: LattesConfig = toml::from_str("").unwrap();
        assert_eq!(config, LattesConfig::default());
    }

    #[test_case(120.0 ; "above hundred")]
    #[test_case(-1.0 ; "negative")]
    #[test_case(f64::NAN ; "not a number")]
    fn test_out_of_range_percentile_is_invalid(percentile: f64) {
        let mut config = LattesConfig::default();
        config.experience.percentile = percentile;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("experience.percentile"));
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-5.0 ; "negative")]
    #[test_case(f64::NAN ; "not a number")]
    fn test_non_positive_cap_is_invalid(cap: f64) {
        let mut config = LattesConfig::default();
        config.experience.caps = [50.0, cap, 20.0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("experience.caps"));
    }

    #[test_case(0.0 ; "lower bound")]
    #[test_case(100.0 ; "upper bound")]
    fn test_percentile_bounds_are_valid(percentile: f64) {
        let mut config = LattesConfig::default();
        config.experience.percentile = percentile;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_sections_are_invalid() {
        let mut config = LattesConfig::default();
        config.similarity.sections.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("similarity.sections"));
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let text = toml::to_string_pretty(&LattesConfig::default()).unwrap();
        let parsed: LattesConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, LattesConfig::default());
    }
}
