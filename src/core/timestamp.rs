//! Timestamp formatting and default formatter configuration
//!
//! The default layout uses a fixed `YYYY/MM/DD HH:MM:SS` stamp in local time.
//! RFC 3339 and custom strftime layouts are available for other consumers.

use super::log_level::LogLevel;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// strftime layout of [`TimestampFormat::Standard`].
pub const STANDARD_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use simplog::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&time), "2024/03/09 07:05:01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024/03/09 07:05:01`, 24-hour clock
    #[default]
    Standard,

    /// RFC 3339 with timezone offset: `2024-03-09T07:05:01+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// ```
    /// use simplog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD_TIME_FORMAT).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Options for [`DefaultFormatter`](crate::DefaultFormatter)
///
/// # Examples
///
/// ```
/// use simplog::{FormatterConfig, LogLevel};
///
/// let config = FormatterConfig::new()
///     .with_show_time(false)
///     .with_show_position_threshold(LogLevel::WARN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Prefix each line with a timestamp
    pub show_time: bool,
    /// Include the level name
    pub show_level: bool,
    /// Append `(file:line)` for records at least this severe
    pub show_position_threshold: LogLevel,
    pub timestamp_format: TimestampFormat,
    /// Colorize the level name (needs the `console` feature).
    ///
    /// Whether escape codes are written is decided by `colored`'s global
    /// terminal detection (stdout being a tty, `NO_COLOR`, `CLICOLOR_FORCE`),
    /// not by the sink. Leave this off for file and memory sinks, or force it
    /// with `colored::control::set_override`.
    pub use_colors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            show_time: true,
            show_level: true,
            show_position_threshold: LogLevel::ERROR,
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    #[must_use]
    pub fn with_show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    #[must_use]
    pub fn with_show_position_threshold(mut self, level: LogLevel) -> Self {
        self.show_position_threshold = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible format string for the timestamp
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}
