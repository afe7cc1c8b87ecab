//! Main logger implementation
//!
//! Every emission call runs the same steps on the calling thread: compare the
//! level with the threshold, capture time and caller, format, then write one
//! line to the sink.
//!
//! A `Logger` holds no lock. Mutation and emission both take `&mut self`, so
//! sharing one between threads means wrapping it in a mutex of the owner's
//! choosing (as [`crate::global`] does). Interleaving of lines written by
//! different loggers to the same destination is up to that destination.

use super::{
    caller::CallerLocation,
    config::{LoggerConfig, SinkConfig},
    error::Result,
    formatter::{DefaultFormatter, Formatter},
    log_level::LogLevel,
    log_record::{join_message, LogRecord},
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::{StderrSink, StdoutSink};
use chrono::Local;
use std::fmt::Display;
use std::sync::Arc;

pub struct Logger {
    level: LogLevel,
    sink: Box<dyn Sink>,
    formatter: Arc<dyn Formatter>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger at `INFO`, writing to standard output with the default formatter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: LogLevel::INFO,
            sink: Box::new(StdoutSink::new()),
            formatter: Arc::new(DefaultFormatter::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a deserialized configuration.
    ///
    /// Fails only when the sink cannot be opened.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let sink: Box<dyn Sink> = match &config.sink {
            SinkConfig::Stdout => Box::new(StdoutSink::new()),
            SinkConfig::Stderr => Box::new(StderrSink::new()),
            #[cfg(feature = "file")]
            SinkConfig::File { path } => Box::new(crate::sinks::FileSink::new(path.clone())?),
        };

        Ok(Self {
            level: config.level,
            sink,
            formatter: Arc::new(DefaultFormatter::with_config(config.formatter.clone())),
            metrics: LoggerMetrics::new(),
        })
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Set the threshold. The value is not validated; an undefined level
    /// panics on the next emission instead.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> &mut (dyn Sink + 'static) {
        self.sink.as_mut()
    }

    /// Replace the sink, returning the previous one. The next emitted line
    /// goes to the new sink.
    pub fn set_sink(&mut self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut self.sink, sink)
    }

    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.formatter)
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Arc::new(formatter);
    }

    /// Install an already shared formatter, such as one obtained from
    /// [`Logger::formatter`].
    pub fn set_shared_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether a record at `level` would pass the threshold.
    ///
    /// # Panics
    ///
    /// Panics if either `level` or the threshold is undefined.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    #[track_caller]
    #[inline]
    pub fn fatal(&mut self, args: &[&dyn Display]) -> bool {
        self.emit(LogLevel::FATAL, None, args)
    }

    #[track_caller]
    #[inline]
    pub fn error(&mut self, args: &[&dyn Display]) -> bool {
        self.emit(LogLevel::ERROR, None, args)
    }

    #[track_caller]
    #[inline]
    pub fn warn(&mut self, args: &[&dyn Display]) -> bool {
        self.emit(LogLevel::WARN, None, args)
    }

    #[track_caller]
    #[inline]
    pub fn info(&mut self, args: &[&dyn Display]) -> bool {
        self.emit(LogLevel::INFO, None, args)
    }

    #[track_caller]
    #[inline]
    pub fn debug(&mut self, args: &[&dyn Display]) -> bool {
        self.emit(LogLevel::DEBUG, None, args)
    }

    /// Log at an arbitrary level.
    ///
    /// Returns `true` only if the record passed the threshold and the sink
    /// accepted the whole line; filtered records and write failures both
    /// return `false`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is undefined.
    ///
    /// ```
    /// use simplog::{Logger, LogLevel, MemorySink};
    ///
    /// let sink = MemorySink::new();
    /// let mut logger = Logger::builder().sink(sink.clone()).build();
    ///
    /// assert!(logger.log(LogLevel::WARN, &[&"disk at", &91, &"%"]));
    /// assert!(!logger.log(LogLevel::DEBUG, &[&"hidden"]));
    /// assert!(sink.contents().contains("WARN. disk at 91 %"));
    /// ```
    #[track_caller]
    #[inline]
    pub fn log(&mut self, level: LogLevel, args: &[&dyn Display]) -> bool {
        self.emit(level, None, args)
    }

    /// Log with a caller location resolved by the caller, as the logging
    /// macros do.
    #[inline]
    pub fn log_at(
        &mut self,
        level: LogLevel,
        caller: CallerLocation,
        args: &[&dyn Display],
    ) -> bool {
        self.emit(level, Some(caller), args)
    }

    /// Like [`log_at`](Self::log_at), but resolves the caller only once the
    /// record has passed the threshold. The logging macros go through here.
    #[inline]
    pub fn log_with(
        &mut self,
        level: LogLevel,
        caller: impl FnOnce() -> CallerLocation,
        args: &[&dyn Display],
    ) -> bool {
        if !self.is_enabled(level) {
            return false;
        }
        self.emit(level, Some(caller()), args)
    }

    #[track_caller]
    fn emit(
        &mut self,
        level: LogLevel,
        caller: Option<CallerLocation>,
        args: &[&dyn Display],
    ) -> bool {
        if !self.is_enabled(level) {
            return false;
        }

        let time = Local::now();
        // Resolved here so the location propagates through `#[track_caller]`.
        let caller = match caller {
            Some(caller) => caller,
            None => CallerLocation::capture(),
        };
        let message = join_message(args);
        let record = LogRecord::new(level, time, caller, &message);

        let mut line = self.formatter.format(&record);
        line.push('\n');

        match self.sink.write_str(&line) {
            Ok(()) => {
                self.metrics.record_logged();
                true
            }
            Err(_) => {
                self.metrics.record_write_failure();
                false
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("sink", &self.sink.name())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use simplog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::DEBUG)
///     .sink(StderrSink::new())
///     .formatter(DefaultFormatter::with_config(
///         FormatterConfig::new().with_show_time(false),
///     ))
///     .build();
/// assert_eq!(logger.level(), LogLevel::DEBUG);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    sink: Option<Box<dyn Sink>>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::INFO,
            sink: None,
            formatter: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_level(self.level);
        if let Some(sink) = self.sink {
            logger.set_sink(sink);
        }
        if let Some(formatter) = self.formatter {
            logger.set_shared_formatter(formatter);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
