//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use caller::CallerLocation;
pub use config::{LoggerConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use formatter::{DefaultFormatter, Formatter};
pub use log_level::LogLevel;
pub use log_record::{join_message, LogRecord};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::{FormatterConfig, TimestampFormat, STANDARD_TIME_FORMAT};
