//! Defaults for the command line, read from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::StrategyKind;
use tracing::{debug, info, instrument};

/// Defaults applied when a flag is not given on the command line.
///
/// ```toml
/// strategy = "alphabeta"
/// seed = 42
/// games = 100
/// ai_first = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Strategy used by `play` when `--strategy` is omitted.
    #[serde(default = "default_strategy")]
    strategy: StrategyKind,

    /// RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games `duel` plays.
    #[serde(default = "default_games")]
    games: u32,

    /// Whether the strategy opens in `play`.
    #[serde(default)]
    ai_first: bool,
}

fn default_strategy() -> StrategyKind {
    StrategyKind::AlphaBeta
}

fn default_games() -> u32 {
    10
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            seed: None,
            games: default_games(),
            ai_first: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }

        info!(strategy = %config.strategy, games = config.games, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
            strategy = "minimax"
            seed = 42
            games = 50
            ai_first = true
            "#,
        );
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.strategy(), StrategyKind::Minimax);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.games(), 50);
        assert!(*config.ai_first());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("seed = 7\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.strategy(), StrategyKind::AlphaBeta);
        assert_eq!(*config.games(), 10);
        assert!(!*config.ai_first());
    }

    #[test]
    fn test_unknown_strategy_is_a_parse_error() {
        let file = write_config("strategy = \"oracle\"\n");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_zero_games_rejected() {
        let file = write_config("games = 0\n");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.message, "games must be at least 1");
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_reports_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}
