//! Logging macros taking any number of `Display` values.
//!
//! The values are joined with single spaces, like the logger methods, and the
//! macro records the enclosing function along with the file and line.
//!
//! # Examples
//!
//! ```
//! use simplog::prelude::*;
//! use simplog::{error, info};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder().sink(sink.clone()).build();
//!
//! let port = 8080;
//! assert!(info!(logger, "Server listening on port", port));
//! assert!(error!(logger, "bind failed:", "address in use"));
//! assert!(sink.lines()[1].contains("bind failed: address in use ("));
//! ```

/// Caller location of the macro invocation site, including the enclosing
/// function path.
#[macro_export]
macro_rules! caller {
    () => {{
        fn __simplog_here() {}
        fn __simplog_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallerLocation::new(
            $crate::core::caller::enclosing_function(__simplog_type_name(__simplog_here)),
            file!(),
            line!(),
        )
    }};
}

/// Log the given values at `level`. Evaluates to the emission result.
///
/// # Examples
///
/// ```
/// # use simplog::prelude::*;
/// # let mut logger = Logger::builder().sink(MemorySink::new()).build();
/// use simplog::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with(
            $level,
            || $crate::caller!(),
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::INFO $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::WARN $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::ERROR $(, $arg)*)
    };
}

/// Log a fatal-level message. Only logs; the process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::FATAL $(, $arg)*)
    };
}
