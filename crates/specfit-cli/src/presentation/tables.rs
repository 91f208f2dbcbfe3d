//! Table formatting utilities for CLI output.

/// Format an optional value for table display, returning a default if None.
///
/// # Examples
///
/// ```rust
/// use specfit_cli::presentation::format_optional;
///
/// assert_eq!(format_optional(&Some(16.5), "?"), "16.5");
/// assert_eq!(format_optional::<f64>(&None, "?"), "?");
/// ```
pub fn format_optional<T: std::fmt::Display>(value: &Option<T>, default: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}
