//! Terminal styling.

use std::io::IsTerminal;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Whether output may contain ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Plain text, no escapes.
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Always colored.
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Colored only if requested, `NO_COLOR` is unset and stdout is a terminal.
    pub fn detect(requested: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: requested && !no_color && std::io::stdout().is_terminal(),
        }
    }

    pub const fn is_colored(self) -> bool {
        self.color
    }

    pub fn pass(self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn fail(self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn bold(self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_has_no_escapes() {
        assert_eq!(Style::plain().fail("FAIL"), "FAIL");
        assert_eq!(Style::plain().bold("Elden Ring"), "Elden Ring");
    }

    #[test]
    fn test_colored_style_wraps_text() {
        assert_eq!(Style::colored().pass("PASS"), "\x1b[32mPASS\x1b[0m");
        assert_eq!(Style::colored().fail("FAIL"), "\x1b[31mFAIL\x1b[0m");
    }

    #[test]
    fn test_detect_respects_request() {
        assert!(!Style::detect(false).is_colored());
    }
}
