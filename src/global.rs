//! Process-wide convenience logger
//!
//! A single [`Logger`] created with [`Logger::new`] defaults on first use and
//! never recreated. Each function forwards to it unchanged. The instance sits
//! behind a mutex only because a static must be shareable between threads;
//! calls from different threads are serialized, one line at a time.
//!
//! ```
//! use simplog::{global, LogLevel, MemorySink};
//!
//! let sink = MemorySink::new();
//! global::set_sink(Box::new(sink.clone()));
//! global::set_level(LogLevel::WARN);
//!
//! assert!(!global::info(&[&"quiet"]));
//! assert!(global::warn(&[&"disk", &"almost", &"full"]));
//! assert!(sink.contents().contains("WARN. disk almost full"));
//! ```

use crate::core::{CallerLocation, Formatter, LogLevel, Logger, Result, Sink};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::fmt::Display;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Mutex<Logger>> = LazyLock::new(|| Mutex::new(Logger::new()));

/// Run `f` with exclusive access to the global logger.
///
/// Logging through the global functions from inside `f` deadlocks; use the
/// `&mut Logger` handed in instead.
pub fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut GLOBAL.lock())
}

pub fn level() -> LogLevel {
    GLOBAL.lock().level()
}

pub fn set_level(level: LogLevel) {
    GLOBAL.lock().set_level(level);
}

/// The current sink, locked for as long as the guard lives.
///
/// Logging through the global functions while the guard is held deadlocks;
/// drop it first, or use [`with_logger`] for longer sessions.
pub fn sink() -> MappedMutexGuard<'static, dyn Sink> {
    MutexGuard::map(GLOBAL.lock(), |logger| logger.sink_mut())
}

/// Replace the sink, returning the previous one.
pub fn set_sink(sink: Box<dyn Sink>) -> Box<dyn Sink> {
    GLOBAL.lock().set_sink(sink)
}

pub fn formatter() -> Arc<dyn Formatter> {
    GLOBAL.lock().formatter()
}

pub fn set_formatter(formatter: impl Formatter + 'static) {
    GLOBAL.lock().set_formatter(formatter);
}

pub fn set_shared_formatter(formatter: Arc<dyn Formatter>) {
    GLOBAL.lock().set_shared_formatter(formatter);
}

pub fn flush() -> Result<()> {
    GLOBAL.lock().flush()
}

#[track_caller]
pub fn fatal(args: &[&dyn Display]) -> bool {
    log(LogLevel::FATAL, args)
}

#[track_caller]
pub fn error(args: &[&dyn Display]) -> bool {
    log(LogLevel::ERROR, args)
}

#[track_caller]
pub fn warn(args: &[&dyn Display]) -> bool {
    log(LogLevel::WARN, args)
}

#[track_caller]
pub fn info(args: &[&dyn Display]) -> bool {
    log(LogLevel::INFO, args)
}

#[track_caller]
pub fn debug(args: &[&dyn Display]) -> bool {
    log(LogLevel::DEBUG, args)
}

#[track_caller]
pub fn log(level: LogLevel, args: &[&dyn Display]) -> bool {
    GLOBAL.lock().log(level, args)
}

pub fn log_at(level: LogLevel, caller: CallerLocation, args: &[&dyn Display]) -> bool {
    GLOBAL.lock().log_at(level, caller, args)
}
