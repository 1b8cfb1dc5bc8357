//! Configuration types for seqmotif

use crate::types::{AlignmentMode, MotifStrategy};
use crate::SeqmotifError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub motif: MotifConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    #[serde(default = "default_match_score")]
    pub match_score: i32,
    #[serde(default = "default_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_indel")]
    pub indel: i32,
    #[serde(default = "default_mode")]
    pub mode: AlignmentMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotifConfig {
    /// Motif width
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_strategy")]
    pub strategy: MotifStrategy,
    /// Gibbs rounds per restart (ignored by randomized search)
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_restarts")]
    pub restarts: usize,
    /// Fixed RNG seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_match_score() -> i32 { 1 }
fn default_mismatch() -> i32 { 1 }
fn default_indel() -> i32 { 1 }
fn default_mode() -> AlignmentMode { AlignmentMode::Global }
fn default_k() -> usize { 8 }
fn default_strategy() -> MotifStrategy { MotifStrategy::Randomized }
fn default_iterations() -> usize { 1000 }
fn default_restarts() -> usize { 20 }
fn default_log_level() -> String { "info".to_string() }

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch: default_mismatch(),
            indel: default_indel(),
            mode: default_mode(),
        }
    }
}

impl Default for MotifConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            strategy: default_strategy(),
            iterations: default_iterations(),
            restarts: default_restarts(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AlignmentConfig {
    /// Check that every score is non-negative
    pub fn validate(&self) -> Result<(), SeqmotifError> {
        for (name, value) in [
            ("match_score", self.match_score),
            ("mismatch", self.mismatch),
            ("indel", self.indel),
        ] {
            if value < 0 {
                return Err(SeqmotifError::Configuration(format!(
                    "alignment.{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl MotifConfig {
    pub fn validate(&self) -> Result<(), SeqmotifError> {
        if self.k == 0 {
            return Err(SeqmotifError::Configuration(
                "motif.k must be positive".to_string(),
            ));
        }
        if self.restarts == 0 {
            return Err(SeqmotifError::Configuration(
                "motif.restarts must be positive".to_string(),
            ));
        }
        if self.strategy == MotifStrategy::Gibbs && self.iterations == 0 {
            return Err(SeqmotifError::Configuration(
                "motif.iterations must be positive for Gibbs sampling".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SeqmotifError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SeqmotifError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.alignment.validate()?;
    config.motif.validate()?;

    debug!(
        path = %path.display(),
        mode = %config.alignment.mode,
        strategy = %config.motif.strategy,
        "Loaded configuration"
    );
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SeqmotifError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SeqmotifError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.alignment.match_score, 1);
        assert_eq!(config.alignment.mismatch, 1);
        assert_eq!(config.alignment.indel, 1);
        assert_eq!(config.alignment.mode, AlignmentMode::Global);

        assert_eq!(config.motif.k, 8);
        assert_eq!(config.motif.strategy, MotifStrategy::Randomized);
        assert_eq!(config.motif.iterations, 1000);
        assert_eq!(config.motif.restarts, 20);
        assert_eq!(config.motif.seed, None);

        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_function() {
        let config1 = Config::default();
        let config2 = default_config();

        assert_eq!(config1.motif.k, config2.motif.k);
        assert_eq!(config1.alignment.mode, config2.alignment.mode);
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[alignment]
match_score = 2
mismatch = 1
indel = 3
mode = "local"

[motif]
k = 12
strategy = "gibbs"
iterations = 500
restarts = 5
seed = 7

[logging]
level = "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.alignment.match_score, 2);
        assert_eq!(config.alignment.mismatch, 1);
        assert_eq!(config.alignment.indel, 3);
        assert_eq!(config.alignment.mode, AlignmentMode::Local);

        assert_eq!(config.motif.k, 12);
        assert_eq!(config.motif.strategy, MotifStrategy::Gibbs);
        assert_eq!(config.motif.iterations, 500);
        assert_eq!(config.motif.restarts, 5);
        assert_eq!(config.motif.seed, Some(7));

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[motif]
k = 6
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.motif.k, 6);
        // Unspecified fields fall back to defaults
        assert_eq!(config.motif.restarts, 20);
        assert_eq!(config.alignment.indel, 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            SeqmotifError::Configuration(msg) => {
                assert!(msg.contains("Failed to parse config"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_rejects_negative_scores() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[alignment]\nindel = -2\n").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            SeqmotifError::Configuration(msg) => {
                assert!(msg.contains("alignment.indel"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_rejects_zero_k() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[motif]\nk = 0\n").unwrap();

        assert!(matches!(
            load_config(temp_file.path()),
            Err(SeqmotifError::Configuration(_))
        ));
    }

    #[test]
    fn test_gibbs_requires_iterations() {
        let config = MotifConfig {
            strategy: MotifStrategy::Gibbs,
            iterations: 0,
            ..MotifConfig::default()
        };
        assert!(config.validate().is_err());

        // Randomized search ignores the iteration count
        let config = MotifConfig {
            strategy: MotifStrategy::Randomized,
            iterations: 0,
            ..MotifConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            SeqmotifError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.alignment.mode = AlignmentMode::Local;
        config.motif.strategy = MotifStrategy::Gibbs;
        config.motif.seed = Some(1234);

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.alignment.mode, AlignmentMode::Local);
        assert_eq!(loaded.motif.strategy, MotifStrategy::Gibbs);
        assert_eq!(loaded.motif.seed, Some(1234));
    }
}
