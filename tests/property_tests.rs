//! Property-based tests for simplog using proptest

use proptest::prelude::*;
use simplog::prelude::*;
use simplog::join_message;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::FATAL),
        Just(LogLevel::ERROR),
        Just(LogLevel::WARN),
        Just(LogLevel::INFO),
        Just(LogLevel::DEBUG),
    ]
}

fn quiet_logger(threshold: LogLevel) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(threshold)
        .sink(sink.clone())
        .formatter(DefaultFormatter::with_config(
            FormatterConfig::new().with_show_time(false),
        ))
        .build();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Ordering follows the raw encoding for defined levels
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1.raw();
        let val2 = level2.raw();

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
        assert_eq!(level1 >= level2, val1 >= val2);
        assert_eq!(level1 > level2, val1 > val2);
    }

    /// Names are five characters wide and parse back to the same level
    #[test]
    fn test_log_level_name_roundtrip(level in any_level()) {
        let name = level.name();
        assert_eq!(name.len(), 5);
        assert_eq!(format!("{}", level), name);
        assert_eq!(name.parse::<LogLevel>().unwrap(), level);
        assert_eq!(name.to_lowercase().parse::<LogLevel>().unwrap(), level);
    }

    /// Every raw value past FATAL is undefined and refuses to be named
    #[test]
    fn test_undefined_levels_panic(raw in 5u8..=u8::MAX) {
        let level = LogLevel::from_raw(raw);
        assert!(!level.is_defined());
        assert!(std::panic::catch_unwind(|| level.name()).is_err());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call is emitted exactly when it is at least as severe as the threshold
    #[test]
    fn test_filtering_matches_ordering(threshold in any_level(), level in any_level()) {
        let (mut logger, sink) = quiet_logger(threshold);

        let sent = logger.log(level, &[&"sample"]);

        assert_eq!(sent, level >= threshold);
        assert_eq!(sink.is_empty(), !sent);
        assert_eq!(logger.metrics().total_logged(), u64::from(sent));
    }
}

// ============================================================================
// Message Joining Tests
// ============================================================================

proptest! {
    /// Words are joined in order with single spaces
    #[test]
    fn test_join_preserves_order(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..8)) {
        let args: Vec<&dyn std::fmt::Display> =
            words.iter().map(|w| w as &dyn std::fmt::Display).collect();

        assert_eq!(join_message(&args), words.join(" "));
    }

    /// Exactly one trailing line terminator is dropped
    #[test]
    fn test_join_strips_one_terminator(
        body in "[a-z ]{0,16}",
        terminator in prop_oneof![Just(""), Just("\n"), Just("\r\n")],
        extra in 0usize..3,
    ) {
        let kept = "\n".repeat(extra);
        let text = format!("{}{}{}", body, kept, terminator);
        let joined = join_message(&[&text]);

        if terminator.is_empty() && extra > 0 {
            assert_eq!(joined, format!("{}{}", body, "\n".repeat(extra - 1)));
        } else {
            assert_eq!(joined, format!("{}{}", body, kept));
        }
    }

    /// The emitted line is exactly the formatted record plus one newline
    #[test]
    fn test_one_line_per_call(words in prop::collection::vec("[a-z]{1,6}", 1..5), level in any_level()) {
        let (mut logger, sink) = quiet_logger(LogLevel::DEBUG);
        logger.set_formatter(|record: &LogRecord<'_>| record.message.to_string());

        let args: Vec<&dyn std::fmt::Display> =
            words.iter().map(|w| w as &dyn std::fmt::Display).collect();
        assert!(logger.log(level, &args));

        assert_eq!(sink.contents(), format!("{}\n", words.join(" ")));
    }
}

// ============================================================================
// Default Formatter Tests
// ============================================================================

proptest! {
    /// Position suffix appears exactly at or above the configured threshold
    #[test]
    fn test_position_threshold(level in any_level(), threshold in any_level()) {
        let (mut logger, sink) = quiet_logger(LogLevel::DEBUG);
        logger.set_formatter(DefaultFormatter::with_config(
            FormatterConfig::new()
                .with_show_time(false)
                .with_show_position_threshold(threshold),
        ));

        assert!(logger.log(level, &[&"msg"]));
        let output = sink.contents();

        assert!(output.starts_with(&format!("{} msg", level.name())));
        assert_eq!(output.contains("property_tests.rs:"), level >= threshold);
    }

    /// Disabling segments never leaves stray separators
    #[test]
    fn test_no_stray_separators(show_time in any::<bool>(), show_level in any::<bool>(), level in any_level()) {
        let (mut logger, sink) = quiet_logger(LogLevel::DEBUG);
        logger.set_formatter(DefaultFormatter::with_config(
            FormatterConfig::new()
                .with_show_time(show_time)
                .with_show_level(show_level)
                .with_show_position_threshold(LogLevel::FATAL),
        ));

        assert!(logger.log(level, &[&"body"]));
        let output = sink.contents();
        let line = output.trim_end_matches('\n');

        assert!(!line.starts_with(' '));
        assert!(!line.contains("  "));
        if level < LogLevel::FATAL {
            assert!(line.ends_with("body"));
        }
        if !show_time && !show_level {
            assert!(line == "body" || line.starts_with("body ("));
        }
    }
}
