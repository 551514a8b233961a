//! Configuration management module
//!
//! Handles loading, saving, and validation of the game timing settings
//! and user preferences.

use crate::{GamesError, Result, APP_NAME, CONFIG_FILE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay between two animation frames of the coin
pub const DEFAULT_ANIMATION_INTERVAL: Duration = Duration::from_millis(100);
/// Delay between two auto-replay checks while a result is shown
pub const DEFAULT_AUTO_REPLAY_POLL: Duration = Duration::from_millis(500);
/// How long a result stays on screen before the coin is flipped again
pub const DEFAULT_AUTO_REPLAY_HOLD: Duration = Duration::from_secs(6);

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between coin animation frames
    #[serde(with = "human_duration")]
    pub animation_interval: Duration,
    /// Delay between auto-replay checks
    #[serde(with = "human_duration")]
    pub auto_replay_poll: Duration,
    /// Result hold time before an automatic re-flip
    #[serde(with = "human_duration")]
    pub auto_replay_hold: Duration,
    /// Whether the coin flip screen starts with auto-replay on
    pub auto_replay: bool,
    /// Log level filter (off, error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            animation_interval: DEFAULT_ANIMATION_INTERVAL,
            auto_replay_poll: DEFAULT_AUTO_REPLAY_POLL,
            auto_replay_hold: DEFAULT_AUTO_REPLAY_HOLD,
            auto_replay: true,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.animation_interval.is_zero() {
            return Err(GamesError::ConfigError(
                "Animation interval must be greater than 0".to_string(),
            ));
        }

        if self.auto_replay_poll.is_zero() {
            return Err(GamesError::ConfigError(
                "Auto-replay poll interval must be greater than 0".to_string(),
            ));
        }

        if self.auto_replay_hold.is_zero() {
            return Err(GamesError::ConfigError(
                "Auto-replay hold must be greater than 0".to_string(),
            ));
        }

        if self.auto_replay_poll > self.auto_replay_hold {
            return Err(GamesError::ConfigError(format!(
                "Auto-replay poll interval ({}) must not exceed the hold ({})",
                humantime::format_duration(self.auto_replay_poll),
                humantime::format_duration(self.auto_replay_hold)
            )));
        }

        self.level_filter()?;

        Ok(())
    }

    /// Parse the configured log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            GamesError::ConfigError(format!("Unknown log level: {}", self.log_level))
        })
    }

    /// Set the animation frame interval
    pub fn with_animation_interval(mut self, interval: Duration) -> Self {
        self.animation_interval = interval;
        self
    }

    /// Set the auto-replay poll interval
    pub fn with_auto_replay_poll(mut self, poll: Duration) -> Self {
        self.auto_replay_poll = poll;
        self
    }

    /// Set the auto-replay hold duration
    pub fn with_auto_replay_hold(mut self, hold: Duration) -> Self {
        self.auto_replay_hold = hold;
        self
    }

    /// Enable or disable auto-replay
    pub fn with_auto_replay(mut self, enabled: bool) -> Self {
        self.auto_replay = enabled;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GamesError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            GamesError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GamesError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            GamesError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/cligames/cligames.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            GamesError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Serde adapter storing durations as human-readable strings ("100ms", "6s")
mod human_duration {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(D::Error::custom)
    }
}
