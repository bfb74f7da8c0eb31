//! Configuration as seen by the commands: file values with flags on top

use anyhow::{anyhow, Context, Result};
use lattes_config::{ConfigLoader, LattesConfig, PathsConfig};
use std::path::{Path, PathBuf};

use crate::cli::DirArgs;

/// Loaded configuration plus the per-invocation overrides
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: LattesConfig,
}

impl CliConfig {
    /// Load `config_file`, else `./lattes.toml`, else defaults, then apply
    /// the global `--output` flag
    pub fn load(config_file: Option<&Path>, output: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to resolve working directory")?;
        let mut settings = ConfigLoader::load_or_default(config_file, &cwd)
            .context("failed to load configuration")?;
        settings.paths.merge(PathsConfig {
            output_path: output,
            ..Default::default()
        });
        Ok(Self { settings })
    }

    /// Wrap already-built settings
    pub fn from_settings(settings: LattesConfig) -> Self {
        Self { settings }
    }

    /// Overlay a command's directory flags
    pub fn apply_dir_args(&mut self, input: &DirArgs) {
        self.settings.paths.merge(PathsConfig {
            candidate_dir: input.dir.clone(),
            recursive: input.recursive,
            ..Default::default()
        });
    }

    /// Overlay the similarity reference flag
    pub fn apply_reference(&mut self, reference: Option<PathBuf>) {
        self.settings.paths.merge(PathsConfig {
            reference_path: reference,
            ..Default::default()
        });
    }

    pub fn candidate_dir(&self) -> Result<&Path> {
        self.settings
            .paths
            .candidate_dir
            .as_deref()
            .ok_or_else(|| anyhow!("no candidate directory: pass --dir or set paths.candidate_dir"))
    }

    pub fn reference_path(&self) -> Result<&Path> {
        self.settings.paths.reference_path.as_deref().ok_or_else(|| {
            anyhow!("no reference curriculum: pass --reference or set paths.reference_path")
        })
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.settings.paths.output_path.as_deref()
    }

    pub fn recursive(&self) -> bool {
        self.settings.paths.recursive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let mut settings = LattesConfig::default();
        settings.paths.candidate_dir = Some(PathBuf::from("from-file"));
        let mut config = CliConfig::from_settings(settings);

        config.apply_dir_args(&DirArgs {
            dir: Some(PathBuf::from("from-flag")),
            recursive: true,
        });
        assert_eq!(config.candidate_dir().unwrap(), Path::new("from-flag"));
        assert!(config.recursive());
    }

    #[test]
    fn test_missing_paths_are_reported() {
        let config = CliConfig::from_settings(LattesConfig::default());
        let err = config.candidate_dir().unwrap_err();
        assert!(err.to_string().contains("--dir"));
        assert!(config.reference_path().is_err());
        assert!(config.output_path().is_none());
    }
}
