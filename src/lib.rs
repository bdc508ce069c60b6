//! FLAGQUIZ - Guess the Flag
//!
//! A terminal quiz game: three flags are shown, pick the one belonging to
//! the named country, and see how many of eight rounds you get right.

use std::fmt;

pub mod app;
pub mod config;
pub mod flags;
pub mod logging;
pub mod quiz;
pub mod simple;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Selected option index outside the displayed options
    InvalidOption(usize),
    /// Operation not allowed in the current session phase
    InvalidPhase {
        operation: &'static str,
        phase: quiz::Phase,
    },
    /// Hand-built round violates the round invariants
    InvalidRound(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuizError::InvalidOption(index) => write!(
                f,
                "Invalid option {}: expected 0..{}",
                index,
                quiz::OPTIONS_PER_ROUND
            ),
            QuizError::InvalidPhase { operation, phase } => {
                write!(f, "Cannot {} while {}", operation, phase)
            }
            QuizError::InvalidRound(msg) => write!(f, "Invalid round: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for FLAGQUIZ operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error handling utilities
pub mod error {
    use super::QuizError;

    /// Contract violations by the caller, as opposed to environment failures
    pub fn is_usage_error(error: &QuizError) -> bool {
        matches!(
            error,
            QuizError::InvalidOption(_)
                | QuizError::InvalidPhase { .. }
                | QuizError::InvalidRound(_)
        )
    }

    /// Convert error to a one-line message for the status bar
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::InvalidOption(_) => "Pick one of the three flags (1-3).".to_string(),
            QuizError::InvalidPhase { .. } => {
                "Dismiss the current message first (Enter).".to_string()
            }
            QuizError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "flagquiz";
pub const CONFIG_FILE: &str = "flagquiz.toml";
pub const LOG_FILE_PREFIX: &str = "flagquiz.log";
pub const DEFAULT_ROUNDS_PER_SESSION: u32 = 8;
pub const MAX_ROUNDS_PER_SESSION: u32 = 100;
