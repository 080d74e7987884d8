//! Serializable logger configuration
//!
//! Covers the options that can live in a config file or the environment. The
//! sink is not configurable here; pass it to [`LoggerBuilder::sink`].
//!
//! [`LoggerBuilder::sink`]: super::LoggerBuilder::sink

use super::error::Result;
use super::log_level::{parse_level, LogLevel};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Environment variable read by [`LoggerConfig::from_env`] for the level
pub const LEVEL_ENV_VAR: &str = "HOOKLOG_LEVEL";

/// Level and timestamp settings for a [`Logger`](super::Logger)
///
/// Level names are parsed leniently: an unknown name becomes `info`.
///
/// ```
/// use hooklog::{LoggerConfig, LogLevel, TimestampFormat};
///
/// let config = LoggerConfig::from_json_str(r#"{"level":"warn","time_format":"UnixMillis"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.time_format, TimestampFormat::UnixMillis);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub time_format: TimestampFormat,
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.time_format.validate()?;
        Ok(config)
    }

    /// Defaults, with the level taken from `HOOKLOG_LEVEL` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(LEVEL_ENV_VAR)
            .map(|value| parse_level(value.trim()))
            .unwrap_or_default();

        Self {
            level,
            ..Self::default()
        }
    }
}
