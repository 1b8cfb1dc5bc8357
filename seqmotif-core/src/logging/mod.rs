//! Logging initialisation
//!
//! The engines only emit `tracing` events; installing a subscriber is left to
//! whoever embeds them. `init_logging` is the stock setup: an `EnvFilter` read
//! from `SEQMOTIF_LOG`, then `RUST_LOG`, then the level passed in.

use crate::config::LoggingConfig;
use crate::SeqmotifError;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "SEQMOTIF_LOG";

/// Resolve the filter directive that `init_logging` would use
pub fn resolve_filter(default_level: &str) -> String {
    std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string())
}

/// Install a global fmt subscriber.
///
/// Fails with `Configuration` if the directive does not parse or a global
/// subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<(), SeqmotifError> {
    let directive = resolve_filter(default_level);
    let filter = EnvFilter::try_new(&directive).map_err(|e| {
        SeqmotifError::Configuration(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| SeqmotifError::Configuration(format!("Failed to install logger: {}", e)))
}

/// Install a subscriber using the `[logging]` section of the config
pub fn init_from_config(config: &LoggingConfig) -> Result<(), SeqmotifError> {
    init_logging(&config.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_is_rejected() {
        // Only reached when neither env var is set in the test process
        if std::env::var(LOG_ENV_VAR).is_err() && std::env::var("RUST_LOG").is_err() {
            let err = init_logging("not a [valid filter").unwrap_err();
            assert!(matches!(err, SeqmotifError::Configuration(_)));
        }
    }

    #[test]
    fn test_config_level_is_used_as_default() {
        if std::env::var(LOG_ENV_VAR).is_err() && std::env::var("RUST_LOG").is_err() {
            let config = LoggingConfig {
                level: "not a [valid filter".to_string(),
            };
            let err = init_from_config(&config).unwrap_err();
            match err {
                SeqmotifError::Configuration(msg) => assert!(msg.contains("not a [valid filter")),
                other => panic!("Expected Configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_resolve_filter_falls_back_to_default() {
        if std::env::var(LOG_ENV_VAR).is_err() && std::env::var("RUST_LOG").is_err() {
            assert_eq!(resolve_filter("warn"), "warn");
        }
    }
}
