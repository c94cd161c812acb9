//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which scoring adapter turns a completed assessment into a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScorerKind {
    /// Always reports the demo ENFP result.
    Fixed,
    /// Counts the preference letters behind the chosen options.
    Tally,
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(ScorerKind::Fixed),
            "tally" => Ok(ScorerKind::Tally),
            other => Err(format!("'{}' is not one of 'fixed', 'tally'", other)),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub auth_delay: Duration,
    pub scorer: ScorerKind,
    pub content_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let auth_delay_ms = match lookup("AUTH_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("AUTH_DELAY_MS".to_string(), e.to_string())
            })?,
            None => 2000,
        };

        let scorer = match lookup("SCORER") {
            Some(raw) => raw
                .parse::<ScorerKind>()
                .map_err(|e| ConfigError::InvalidValue("SCORER".to_string(), e))?,
            None => ScorerKind::Fixed,
        };

        let content_path = lookup("CONTENT_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            auth_delay: Duration::from_millis(auth_delay_ms),
            scorer,
            content_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).expect("defaults");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.auth_delay, Duration::from_millis(2000));
        assert_eq!(config.scorer, ScorerKind::Fixed);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("RUST_LOG", "debug"),
            ("AUTH_DELAY_MS", "15"),
            ("SCORER", "Tally"),
            ("CONTENT_PATH", "./content.json"),
        ])
        .expect("config");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.auth_delay, Duration::from_millis(15));
        assert_eq!(config.scorer, ScorerKind::Tally);
        assert_eq!(config.content_path, Some(PathBuf::from("./content.json")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("SCORER", "ml")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "SCORER"
        ));
        assert!(matches!(
            load(&[("AUTH_DELAY_MS", "soon")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "AUTH_DELAY_MS"
        ));
        assert!(load(&[("RUST_LOG", "chatty")]).is_err());
    }
}
