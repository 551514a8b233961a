//! cligames - terminal game menu
//!
//! A small TUI that hosts simple games behind a main menu. The only game
//! implemented so far is an animated coin flip with auto-replay.

use std::fmt;

pub mod app;
pub mod config;
pub mod game;
pub mod logging;

// Common error types
#[derive(Debug)]
pub enum GamesError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Terminal setup, rendering or input error
    TuiError(String),
    /// Logger could not be installed
    LogError(String),
}

impl fmt::Display for GamesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamesError::IoError(err) => write!(f, "I/O error: {}", err),
            GamesError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GamesError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            GamesError::LogError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for GamesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GamesError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GamesError {
    fn from(err: std::io::Error) -> Self {
        GamesError::IoError(err)
    }
}

impl From<toml::de::Error> for GamesError {
    fn from(err: toml::de::Error) -> Self {
        GamesError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for GamesError {
    fn from(err: toml::ser::Error) -> Self {
        GamesError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for cligames operations
pub type Result<T> = std::result::Result<T, GamesError>;

// Common types and constants
pub const APP_NAME: &str = "cligames";
pub const CONFIG_FILE: &str = "cligames.toml";
pub const LOG_FILE: &str = "cligames.log";

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = GamesError::ConfigError("bad interval".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad interval");

        let err = GamesError::TuiError("no tty".to_string());
        assert_eq!(err.to_string(), "TUI error: no tty");
    }

    #[test]
    fn test_io_error_source() {
        let err: GamesError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));

        let err = GamesError::LogError("x".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: GamesError = parsed.unwrap_err().into();
        assert!(matches!(err, GamesError::ConfigError(_)));
    }
}
