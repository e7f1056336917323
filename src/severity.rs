use std::fmt;

use colored::Color;

/// Importance of a log record.
///
/// The derived ordering is the threshold order used by [`LevelPolicy`]:
/// `Info < Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

/// Label used for raw severity codes that do not map to a [`Severity`].
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Upper-case label written into both rendered forms.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Console accent for this severity.
    pub const fn accent(self) -> Accent {
        match self {
            Severity::Info => Accent::Color(Color::Blue),
            Severity::Warning => Accent::Color(Color::Yellow),
            Severity::Error => Accent::Color(Color::Red),
            Severity::Critical => Accent::Color(Color::Magenta),
        }
    }

    /// Numeric code of this severity (`0` for `Info` up to `3` for `Critical`).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a numeric code back to a severity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pico_logger::Severity;
    /// assert_eq!(Severity::from_code(2), Some(Severity::Error));
    /// assert_eq!(Severity::from_code(9), None);
    /// ```
    pub const fn from_code(code: u8) -> Option<Severity> {
        match code {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            3 => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw severity code, falling back to `UNKNOWN`.
pub fn label_for_code(code: u8) -> &'static str {
    Severity::from_code(code).map_or(UNKNOWN_LABEL, Severity::label)
}

/// Accent for a raw severity code, falling back to the neutral accent.
pub fn accent_for_code(code: u8) -> Accent {
    Severity::from_code(code).map_or(Accent::Neutral, Severity::accent)
}

/// Visual accent applied to the severity label in the display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Color(Color),
    Neutral,
}

impl Accent {
    /// ANSI reset sequence closing every accent.
    pub const RESET: &'static str = "\x1B[0m";

    /// ANSI select-graphic-rendition sequence opening this accent.
    pub fn sgr(self) -> String {
        match self {
            Accent::Color(color) => format!("\x1B[{}m", color.to_fg_str()),
            Accent::Neutral => Self::RESET.to_string(),
        }
    }
}

/// The level gate: an on/off switch plus a minimum severity.
///
/// # Examples
///
/// ```
/// # use pico_logger::{LevelPolicy, Severity};
/// let mut policy = LevelPolicy::default();
/// assert!(policy.allows(Severity::Info));
///
/// policy.set_minimum_level(Severity::Warning);
/// assert!(!policy.allows(Severity::Info));
/// assert!(policy.allows(Severity::Critical));
///
/// policy.set_enabled(false);
/// assert!(!policy.allows(Severity::Critical));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPolicy {
    enabled: bool,
    minimum: Severity,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self::new(true, Severity::Info)
    }
}

impl LevelPolicy {
    pub const fn new(enabled: bool, minimum: Severity) -> Self {
        Self { enabled, minimum }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_minimum_level(&mut self, minimum: Severity) {
        self.minimum = minimum;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn minimum_level(&self) -> Severity {
        self.minimum
    }

    /// Returns true when a record of `severity` passes the gate.
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.minimum
    }

    /// Gate check for a raw severity code. Codes above the known range count
    /// as more severe than `Critical`.
    #[inline]
    pub fn allows_code(&self, code: u8) -> bool {
        self.enabled && code >= self.minimum.code()
    }
}
