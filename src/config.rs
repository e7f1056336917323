use crate::severity::{LevelPolicy, Severity};

/// Bound on the interpolated message in the display form, terminator included.
pub const DISPLAY_LINE_LIMIT: usize = 512;

/// Bound on the whole persisted line, terminator included.
pub const PERSISTED_LINE_LIMIT: usize = 1024;

/// Capacity the record store jumps to on its first append.
pub const STORE_CAPACITY_FLOOR: usize = 16;

/// Construction-time settings for a [`Logger`](crate::Logger).
///
/// `Default` gives the behaviour of the facility when nobody configures it:
/// logging on, everything from `Info` up, colored labels and the fixed text
/// bounds above.
///
/// # Examples
///
/// ```
/// # use pico_logger::{LoggerConfig, Severity};
/// let config = LoggerConfig::default()
///     .with_minimum_level(Severity::Warning)
///     .with_colorize(false);
/// assert_eq!(config.minimum_level, Severity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub minimum_level: Severity,
    /// Wrap severity labels of the display form in ANSI accents.
    pub colorize: bool,
    pub display_limit: usize,
    pub persisted_limit: usize,
    pub initial_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_level: Severity::Info,
            colorize: true,
            display_limit: DISPLAY_LINE_LIMIT,
            persisted_limit: PERSISTED_LINE_LIMIT,
            initial_capacity: STORE_CAPACITY_FLOOR,
        }
    }
}

impl LoggerConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_minimum_level(mut self, minimum_level: Severity) -> Self {
        self.minimum_level = minimum_level;
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Overrides both text bounds. Values below 1 are raised to 1, which
    /// leaves room for nothing but the terminator.
    pub fn with_limits(mut self, display_limit: usize, persisted_limit: usize) -> Self {
        self.display_limit = display_limit.max(1);
        self.persisted_limit = persisted_limit.max(1);
        self
    }

    /// Overrides the capacity floor of the record store (at least 1).
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(1);
        self
    }

    pub(crate) fn policy(&self) -> LevelPolicy {
        LevelPolicy::new(self.enabled, self.minimum_level)
    }
}
