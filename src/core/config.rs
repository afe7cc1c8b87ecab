//! Serializable logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::FormatterConfig;
use serde::{Deserialize, Serialize};
#[cfg(feature = "file")]
use std::path::PathBuf;

/// Where a configured logger writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    #[default]
    Stdout,
    Stderr,
    #[cfg(feature = "file")]
    File { path: PathBuf },
}

/// Everything needed to build a [`Logger`](crate::Logger) with the default
/// formatter. Missing fields take the same defaults as [`Logger::new`](crate::Logger::new).
///
/// # Example
///
/// ```
/// use simplog::{LoggerConfig, LogLevel, SinkConfig};
///
/// let config = LoggerConfig::from_json_str(
///     r#"{ "level": "debug", "sink": { "type": "stderr" }, "formatter": { "show_time": false } }"#,
/// ).unwrap();
///
/// assert_eq!(config.level, LogLevel::DEBUG);
/// assert_eq!(config.sink, SinkConfig::Stderr);
/// assert!(!config.formatter.show_time);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub sink: SinkConfig,
    pub formatter: FormatterConfig,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        #[cfg(feature = "file")]
        {
            if let SinkConfig::File { path } = &self.sink {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("sink", "file path must not be empty"));
                }
            }
        }
        if let super::timestamp::TimestampFormat::Custom(format) =
            &self.formatter.timestamp_format
        {
            if format.is_empty() {
                return Err(LoggerError::config(
                    "formatter",
                    "custom timestamp format must not be empty",
                ));
            }
        }
        Ok(())
    }
}
