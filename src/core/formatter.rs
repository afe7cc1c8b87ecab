//! Formatting strategies turning a [`LogRecord`] into one line of text

use super::log_record::LogRecord;
use super::timestamp::FormatterConfig;

/// Converts a record into a single line, without the trailing newline.
///
/// Any `Fn(&LogRecord) -> String` is a formatter, so closures and plain
/// functions can be passed wherever a formatter is expected:
///
/// ```
/// use simplog::{Logger, LogRecord, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut logger = Logger::builder()
///     .sink(sink.clone())
///     .formatter(|record: &LogRecord<'_>| format!("<{}>", record.message))
///     .build();
///
/// assert!(logger.info(&[&"ready"]));
/// assert_eq!(sink.contents(), "<ready>\n");
/// ```
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord<'_>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord<'_>) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord<'_>) -> String {
        self(record)
    }
}

/// Built-in layout: `[time] [LEVEL] message [(file:line)]`
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {
    config: FormatterConfig,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    fn level_segment(&self, record: &LogRecord<'_>) -> String {
        let name = record.level.name();
        #[cfg(feature = "console")]
        {
            if self.config.use_colors {
                use colored::Colorize;
                return name.color(record.level.color()).to_string();
            }
        }
        name.to_string()
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, record: &LogRecord<'_>) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(4);

        if self.config.show_time {
            segments.push(self.config.timestamp_format.format(&record.time));
        }
        if self.config.show_level {
            segments.push(self.level_segment(record));
        }
        segments.push(record.message.to_string());
        if record.level >= self.config.show_position_threshold {
            segments.push(format!("({}:{})", record.file(), record.line()));
        }

        segments.join(" ")
    }
}
