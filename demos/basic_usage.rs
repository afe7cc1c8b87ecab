//! Basic logger usage example
//!
//! Demonstrates level filtering, swapping sinks and formatters, and the
//! global logger.
//!
//! Run with: cargo run --example basic_usage

use simplog::prelude::*;
use simplog::{global, info, warn};

fn main() -> Result<()> {
    println!("=== simplog - Basic Usage Example ===\n");

    let mut logger = Logger::new();

    println!("1. Logging at different levels (threshold INFO):");
    logger.fatal(&[&"This is a fatal message"]);
    logger.error(&[&"This is an error message"]);
    logger.warn(&[&"This is a warning message"]);
    logger.info(&[&"This is an info message"]);
    let shown = logger.debug(&[&"This is a debug message"]);
    println!("   debug emitted: {}", shown);

    println!("\n2. Lowering the threshold to DEBUG:");
    logger.set_level(LogLevel::DEBUG);
    logger.debug(&[&"Debug message (visible)", &42]);

    println!("\n3. Macros record the calling function:");
    logger.set_formatter(|record: &LogRecord<'_>| {
        format!("{} [{}] {}", record.level, record.function(), record.message)
    });
    info!(logger, "Server listening on port", 8080);
    warn!(logger, "Retry", 3, "of", 5);

    println!("\n4. Writing to standard error without timestamps:");
    logger.set_sink(Box::new(StderrSink::new()));
    logger.set_formatter(DefaultFormatter::with_config(
        FormatterConfig::new().with_show_time(false),
    ));
    logger.error(&[&"Shown on stderr with its position"]);
    logger.flush()?;

    println!("\n5. The global logger:");
    global::info(&[&"Hello from the global logger"]);

    let config = LoggerConfig::from_json_str(
        r#"{ "level": "warn", "formatter": { "show_time": false } }"#,
    )?;
    let mut configured = Logger::from_config(&config)?;
    println!("\n6. Logger from JSON config (threshold {}):", configured.level());
    configured.info(&[&"Info message (hidden)"]);
    configured.warn(&[&"Warning message (visible)"]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
