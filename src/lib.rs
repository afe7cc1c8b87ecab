//! # simplog
//!
//! A small leveled logger: records below the configured severity are dropped,
//! the rest are formatted by a pluggable [`Formatter`] and written as one line
//! to a pluggable [`Sink`].
//!
//! ## Features
//!
//! - **Five levels**: `FATAL`, `ERROR`, `WARN.`, `INFO.`, `DEBUG`
//! - **Caller position**: file and line of the logging call, function name via macros
//! - **Swappable parts**: level, sink and formatter can change between any two calls
//! - **Global logger**: a process-wide instance in [`global`]
//!
//! ```
//! use simplog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder()
//!     .sink(sink.clone())
//!     .formatter(DefaultFormatter::with_config(
//!         FormatterConfig::new().with_show_time(false),
//!     ))
//!     .build();
//!
//! assert!(logger.info(&[&"test", &"message"]));
//! assert!(!logger.debug(&[&"not shown"]));
//! assert_eq!(sink.contents(), "INFO. test message\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, StderrSink, StdoutSink, WriterSink};
    pub use crate::core::{
        CallerLocation, DefaultFormatter, Formatter, FormatterConfig, LogLevel, LogRecord,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
        SinkConfig, TimestampFormat,
    };
}

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::{MemorySink, StderrSink, StdoutSink, WriterSink};
pub use crate::core::{
    join_message, CallerLocation, DefaultFormatter, Formatter, FormatterConfig, LogLevel,
    LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
    SinkConfig, TimestampFormat, STANDARD_TIME_FORMAT,
};
