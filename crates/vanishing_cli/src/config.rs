//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use vanishing_tictactoe::Player;

/// Configuration for the `vanishing` driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VanishingConfig {
    /// Player who moves first in every game, including after a reset.
    #[serde(default = "default_starting_player")]
    starting_player: Player,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_starting_player() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for VanishingConfig {
    fn default() -> Self {
        Self {
            starting_player: default_starting_player(),
            log_filter: default_log_filter(),
        }
    }
}

impl VanishingConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before the subscriber is installed, so its own events are only
    /// seen when a subscriber already exists (as in tests).
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(starting_player = %config.starting_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the starting player when a command-line override is present.
    pub fn with_starting_player(mut self, starting: Option<Player>) -> Self {
        if let Some(player) = starting {
            self.starting_player = player;
        }
        self
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
    /// Creates a new configuration error.
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

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = VanishingConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, VanishingConfig::default());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_override_only_when_given() {
        let config = VanishingConfig::default().with_starting_player(None);
        assert_eq!(*config.starting_player(), Player::X);
        let config = config.with_starting_player(Some(Player::O));
        assert_eq!(*config.starting_player(), Player::O);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = VanishingConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
