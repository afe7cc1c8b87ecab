//! Log record passed to formatters

use super::caller::CallerLocation;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};

/// One logging event, built after the level filter passes and dropped once
/// the formatted line has been written.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub time: DateTime<Local>,
    pub caller: CallerLocation,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: LogLevel,
        time: DateTime<Local>,
        caller: CallerLocation,
        message: &'a str,
    ) -> Self {
        Self {
            level,
            time,
            caller,
            message,
        }
    }

    #[inline]
    pub fn function(&self) -> &'static str {
        self.caller.function
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.caller.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.caller.line
    }
}

/// Render every value with `Display`, separated by single spaces, and drop
/// one trailing line terminator (`\n` or `\r\n`).
pub fn join_message(args: &[&dyn fmt::Display]) -> String {
    let mut message = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            message.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(message, "{}", arg);
    }
    if message.ends_with('\n') {
        message.pop();
        if message.ends_with('\r') {
            message.pop();
        }
    }
    message
}
