//! Configuration management module
//!
//! Handles loading, saving, and validation of the quiz configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::quiz::{Catalog, DEFAULT_COUNTRIES};
use crate::{
    QuizError, Result, APP_NAME, CONFIG_FILE, DEFAULT_ROUNDS_PER_SESSION, MAX_ROUNDS_PER_SESSION,
};

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Countries rounds are drawn from
    pub countries: Vec<String>,
    /// Answers per session before the restart prompt
    pub rounds_per_session: u32,
    /// Fixed RNG seed for reproducible rounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            rounds_per_session: DEFAULT_ROUNDS_PER_SESSION,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        Catalog::validate(&self.countries)?;

        if self.rounds_per_session == 0 {
            return Err(QuizError::ConfigError(
                "Rounds per session must be greater than 0".to_string(),
            ));
        }

        if self.rounds_per_session > MAX_ROUNDS_PER_SESSION {
            return Err(QuizError::ConfigError(format!(
                "Too many rounds per session: {} (max: {})",
                self.rounds_per_session, MAX_ROUNDS_PER_SESSION
            )));
        }

        // TOML integers are signed 64-bit
        if let Some(seed) = self.seed {
            if seed > i64::MAX as u64 {
                return Err(QuizError::ConfigError(format!(
                    "Seed too large: {} (max: {})",
                    seed,
                    i64::MAX
                )));
            }
        }

        Ok(())
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of rounds per session
    pub fn with_rounds_per_session(mut self, rounds: u32) -> Self {
        self.rounds_per_session = rounds;
        self
    }

    /// Replace the country catalog
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path, default if absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
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

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/flagquiz/flagquiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = QuizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rounds_per_session, 8);
        assert_eq!(config.countries.len(), 11);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders() {
        let config = QuizConfig::new()
            .with_seed(9)
            .with_rounds_per_session(3)
            .with_countries(["France", "Spain", "Nigeria"]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rounds_per_session, 3);
        assert_eq!(config.countries, vec!["France", "Spain", "Nigeria"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        assert!(QuizConfig::new().with_rounds_per_session(0).validate().is_err());
        assert!(QuizConfig::new().with_rounds_per_session(101).validate().is_err());
        assert!(QuizConfig::new()
            .with_countries(["France", "Spain"])
            .validate()
            .is_err());
    }

    #[test]
    fn test_seed_must_fit_toml_integer() {
        assert!(QuizConfig::new().with_seed(i64::MAX as u64).validate().is_ok());
        let err = QuizConfig::new().with_seed(u64::MAX).validate().unwrap_err();
        assert!(err.to_string().contains("Seed too large"));
    }

    #[test]
    fn test_toml_serialization() {
        let config = QuizConfig::new().with_seed(42);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: QuizConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: QuizConfig = toml::from_str("rounds_per_session = 5").unwrap();
        assert_eq!(config.rounds_per_session, 5);
        assert_eq!(config.countries.len(), 11);
    }

    #[test]
    fn test_config_file_path() {
        if let Ok(path) = QuizConfig::config_file_path() {
            assert!(path.to_string_lossy().contains("flagquiz"));
            assert!(path.to_string_lossy().ends_with("flagquiz.toml"));
        }
    }
}
