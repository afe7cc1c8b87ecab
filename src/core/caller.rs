//! Best-effort caller location lookup

use std::panic::Location;

/// Where a logging call was made from.
///
/// Every field may be empty (or zero) when the position could not be
/// resolved; nothing downstream treats that as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallerLocation {
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallerLocation {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    pub const fn unknown() -> Self {
        Self::new("", "", 0)
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    ///
    /// The function name is not available this way and is left empty.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new("", location.file(), location.line())
    }

    pub fn is_known(&self) -> bool {
        !self.file.is_empty()
    }
}

/// Strip the helper item name that [`caller!`](crate::caller) appends to the
/// enclosing function path, along with any closure segments.
#[doc(hidden)]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__simplog_here").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_points_here() {
        let caller = CallerLocation::capture();
        assert!(caller.file.ends_with("caller.rs"));
        assert_eq!(caller.line, line!() - 2);
        assert!(caller.function.is_empty());
        assert!(caller.is_known());
    }

    #[test]
    fn test_unknown_is_empty() {
        let caller = CallerLocation::unknown();
        assert_eq!(caller, CallerLocation::default());
        assert!(!caller.is_known());
    }

    #[test]
    fn test_enclosing_function() {
        assert_eq!(
            enclosing_function("app::server::run::__simplog_here"),
            "app::server::run"
        );
        assert_eq!(
            enclosing_function("app::main::{{closure}}::{{closure}}::__simplog_here"),
            "app::main"
        );
        assert_eq!(enclosing_function("plain"), "plain");
    }

    #[test]
    fn test_macro_capture() {
        let caller = crate::caller!();
        assert!(caller.function.ends_with("test_macro_capture"));
        assert!(caller.file.ends_with("caller.rs"));
        assert!(caller.line > 0);
    }
}
