use std::fmt::{self, Write as _};

use chrono::Local;

use crate::config::LoggerConfig;
use crate::location::SourceLocation;
use crate::severity::{accent_for_code, label_for_code, Accent, Severity};

/// `strftime`-style layout of record timestamps (local time, whole seconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two renderings of one log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecord {
    /// Human-facing line, label possibly wrapped in an ANSI accent.
    pub display: String,
    /// Plain line retained in the record store.
    pub persisted: String,
}

/// Renders log records into their display and persisted forms.
///
/// Both forms carry the same fields:
///
/// ```text
/// [2025-01-31 12:00:00] ERROR [src/disk.rs:42] check_usage: disk at 91%
/// ```
///
/// The display form accents the label and clips the interpolated message to
/// `display_limit - 1` bytes. The persisted form is clipped as a whole line
/// to `persisted_limit - 1` bytes. Clipping never splits a UTF-8 character,
/// so a clipped line may come out a few bytes shorter than the bound when the
/// cut lands inside a multi-byte character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFormatter {
    colorize: bool,
    display_limit: usize,
    persisted_limit: usize,
}

impl MessageFormatter {
    pub const fn new(colorize: bool, display_limit: usize, persisted_limit: usize) -> Self {
        Self {
            colorize,
            display_limit,
            persisted_limit,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.colorize, config.display_limit, config.persisted_limit)
    }

    pub const fn display_limit(&self) -> usize {
        self.display_limit
    }

    pub const fn persisted_limit(&self) -> usize {
        self.persisted_limit
    }

    /// Renders a record stamped with the current local time.
    pub fn render(
        &self,
        severity: Severity,
        location: &SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> RenderedRecord {
        self.render_with_timestamp(&local_timestamp(), severity, location, args)
    }

    /// Renders a record with a caller-supplied timestamp string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pico_logger::{MessageFormatter, Severity, SourceLocation};
    /// let formatter = MessageFormatter::new(false, 512, 1024);
    /// let location = SourceLocation::new("src/disk.rs", 42, "check_usage");
    /// let record = formatter.render_with_timestamp(
    ///     "2025-01-31 12:00:00",
    ///     Severity::Error,
    ///     &location,
    ///     format_args!("disk at {}%", 91),
    /// );
    /// assert_eq!(
    ///     record.persisted,
    ///     "[2025-01-31 12:00:00] ERROR [src/disk.rs:42] check_usage: disk at 91%"
    /// );
    /// ```
    pub fn render_with_timestamp(
        &self,
        timestamp: &str,
        severity: Severity,
        location: &SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> RenderedRecord {
        self.render_parts(timestamp, severity.label(), severity.accent(), location, args)
    }

    /// Renders a record whose severity arrives as a raw numeric code.
    ///
    /// Codes outside the [`Severity`] range are labelled `UNKNOWN` and get
    /// the neutral accent.
    pub fn render_code(
        &self,
        code: u8,
        location: &SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> RenderedRecord {
        self.render_parts(
            &local_timestamp(),
            label_for_code(code),
            accent_for_code(code),
            location,
            args,
        )
    }

    fn render_parts(
        &self,
        timestamp: &str,
        label: &str,
        accent: Accent,
        location: &SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> RenderedRecord {
        let message = args.to_string();

        let mut persisted = String::with_capacity(message.len() + 64);
        // Writing into a String cannot fail
        let _ = write!(
            persisted,
            "[{}] {} [{}:{}] {}: {}",
            timestamp, label, location.file, location.line, location.function, message
        );
        truncate_to_limit(&mut persisted, self.persisted_limit);

        let mut display_message = message;
        truncate_to_limit(&mut display_message, self.display_limit);

        let mut display = String::with_capacity(display_message.len() + 80);
        if self.colorize {
            let _ = write!(display, "[{}] {}{}{}", timestamp, accent.sgr(), label, Accent::RESET);
        } else {
            let _ = write!(display, "[{}] {}", timestamp, label);
        }
        let _ = write!(
            display,
            " [{}:{}] {}: {}",
            location.file, location.line, location.function, display_message
        );

        RenderedRecord { display, persisted }
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::from_config(&LoggerConfig::default())
    }
}

/// Current local wall-clock time formatted with [`TIMESTAMP_FORMAT`].
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Clips `text` so it fits a buffer of `limit` bytes including a terminator,
/// i.e. to at most `limit - 1` bytes, backing off to a character boundary.
pub fn truncate_to_limit(text: &mut String, limit: usize) {
    let max = limit.saturating_sub(1);
    if text.len() <= max {
        return;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2025-01-31 12:00:00";

    fn loc() -> SourceLocation {
        SourceLocation::new("src/main.rs", 7, "main")
    }

    #[test]
    fn test_truncate_ascii() {
        let mut text = "a".repeat(20);
        truncate_to_limit(&mut text, 10);
        assert_eq!(text.len(), 9);

        let mut short = String::from("abc");
        truncate_to_limit(&mut short, 10);
        assert_eq!(short, "abc");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 'é' is two bytes, so byte 9 falls inside the fifth character
        let mut text = "é".repeat(10);
        truncate_to_limit(&mut text, 10);
        assert_eq!(text, "é".repeat(4));
    }

    #[test]
    fn test_truncate_zero_limit() {
        let mut text = String::from("abc");
        truncate_to_limit(&mut text, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_colorized_display() {
        let formatter = MessageFormatter::new(true, 512, 1024);
        let record = formatter.render_with_timestamp(TS, Severity::Warning, &loc(), format_args!("low on {}", "disk"));
        assert_eq!(
            record.display,
            "[2025-01-31 12:00:00] \x1B[33mWARNING\x1B[0m [src/main.rs:7] main: low on disk"
        );
        assert_eq!(
            record.persisted,
            "[2025-01-31 12:00:00] WARNING [src/main.rs:7] main: low on disk"
        );
    }

    #[test]
    fn test_unknown_code() {
        let formatter = MessageFormatter::new(false, 512, 1024);
        let record = formatter.render_code(42, &loc(), format_args!("odd"));
        assert!(record.persisted.contains("] UNKNOWN [src/main.rs:7] main: odd"));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = local_timestamp();
        assert_eq!(ts.len(), 19);
        let bytes = ts.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }
}
