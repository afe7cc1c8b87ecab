//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Stored as a raw byte so that a value outside the five defined levels can
/// be carried around (for example via [`LogLevel::from_raw`]). Such a value
/// panics as soon as it is named or compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogLevel(u8);

impl LogLevel {
    pub const DEBUG: LogLevel = LogLevel(0);
    pub const INFO: LogLevel = LogLevel(1);
    pub const WARN: LogLevel = LogLevel(2);
    pub const ERROR: LogLevel = LogLevel(3);
    pub const FATAL: LogLevel = LogLevel(4);

    /// Every defined level, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::FATAL,
        LogLevel::ERROR,
        LogLevel::WARN,
        LogLevel::INFO,
        LogLevel::DEBUG,
    ];

    /// Build a level from its raw encoding without validation.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        LogLevel(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_defined(self) -> bool {
        self.0 <= LogLevel::FATAL.0
    }

    /// Fixed-width name of the level.
    ///
    /// # Panics
    ///
    /// Panics with `undefined log level` when the raw value is not one of the
    /// five defined levels.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::FATAL => "FATAL",
            LogLevel::ERROR => "ERROR",
            LogLevel::WARN => "WARN.",
            LogLevel::INFO => "INFO.",
            LogLevel::DEBUG => "DEBUG",
            _ => panic!("undefined log level"),
        }
    }

    /// Rank used for ordering; higher is more severe.
    fn severity(self) -> u8 {
        if !self.is_defined() {
            panic!("undefined log level");
        }
        self.0
    }

    #[cfg(feature = "console")]
    pub fn color(self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::DEBUG => Blue,
            LogLevel::INFO => Green,
            LogLevel::WARN => Yellow,
            LogLevel::ERROR => Red,
            LogLevel::FATAL => BrightRed,
            _ => panic!("undefined log level"),
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('.').to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::FATAL),
            "ERROR" => Ok(LogLevel::ERROR),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "INFO" => Ok(LogLevel::INFO),
            "DEBUG" => Ok(LogLevel::DEBUG),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name().trim_end_matches('.'))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
