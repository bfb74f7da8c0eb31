//! Loading `lattes.toml`

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::LattesConfig;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "lattes.toml";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given explicitly but not present
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error reading the config file
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path to the file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("invalid TOML in {}: {message}", path.display())]
    Parse {
        /// Path to the file
        path: PathBuf,
        /// Error message from the TOML deserializer
        message: String,
    },

    /// Well-formed value that no report accepts
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Dotted key, e.g. `experience.percentile`
        key: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Resolves and reads configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read, parse and validate one TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<LattesConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::load_from_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse and validate TOML text
    pub fn load_from_str(content: &str) -> Result<LattesConfig, ConfigError> {
        let config: LattesConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit file when given, else `lattes.toml` in `dir` when present,
    /// else defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<LattesConfig, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config");
            return Self::load_from_file(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            info!(path = %candidate.display(), "loading config");
            return Self::load_from_file(candidate);
        }

        debug!("no config file, using defaults");
        Ok(LattesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FormationSection;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[paths]
reference_path = "ref.xml"
candidate_dir = "curriculos"
recursive = true

[similarity]
sections = ["mestrado", "doutorado"]

[production]
h_index = 12.5
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.paths.reference_path, Some(PathBuf::from("ref.xml")));
        assert!(config.paths.recursive);
        assert_eq!(
            config.similarity.sections,
            vec![FormationSection::Mestrado, FormationSection::Doutorado]
        );
        assert_eq!(config.production.h_index, 12.5);
        assert_eq!(config.quality.weights, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load_or_default(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_or_default(None, dir.path()).unwrap();
        assert_eq!(config, LattesConfig::default());
    }

    #[test]
    fn test_picks_up_working_directory_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[reputation]\ncommittee_weight = 0.7\ncoauthor_weight = 0.3\n",
        )
        .unwrap();

        let config = ConfigLoader::load_or_default(None, dir.path()).unwrap();
        assert_eq!(config.reputation.committee_weight, 0.7);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[paths\nrecursive = maybe").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = ConfigLoader::load_from_str("[experience]\npercentile = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
