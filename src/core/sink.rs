//! Sink trait for log output destinations

use std::io;

/// Destination for formatted log lines.
///
/// The logger hands over each line, newline included, in a single
/// `write_str` call and reports any error as a failed emission.
pub trait Sink: Send {
    fn write_str(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    fn name(&self) -> &str;
}
