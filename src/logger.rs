use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::LoggerConfig;
use crate::diagnostics::{self, STACK_TRACE_HEADER};
use crate::error::Result;
use crate::formatter::{MessageFormatter, RenderedRecord};
use crate::location::SourceLocation;
use crate::perf_timer::{metrics_line, PerformanceTimer};
use crate::record_store::RecordStore;
use crate::severity::{LevelPolicy, Severity};

/// Destination of everything the logger shows to a human.
///
/// Display-form records, timer reports and diagnostics all arrive here one
/// line at a time, without a trailing newline. The logger never writes to a
/// terminal on its own, so tests and embedders can capture or redirect
/// console output by supplying their own handler.
///
/// # Usage
///
/// ```
/// # use pico_logger::ConsoleHandler;
/// # use std::sync::{Arc, Mutex};
/// struct Collecting(Arc<Mutex<Vec<String>>>);
///
/// impl ConsoleHandler for Collecting {
///     fn handle_display_line(&self, line: &str) {
///         self.0.lock().unwrap().push(line.to_string());
///     }
/// }
/// ```
pub trait ConsoleHandler: Send {
    /// Shows one line of console output.
    fn handle_display_line(&self, line: &str);
}

/// Console handler writing each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutHandler;

impl ConsoleHandler for StdoutHandler {
    fn handle_display_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // Output errors are ignored
        let _ = writeln!(out, "{}", line);
    }
}

/// Console handler that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHandler;

impl ConsoleHandler for NullHandler {
    fn handle_display_line(&self, _line: &str) {}
}

/// The logging facility.
///
/// A `Logger` owns the whole record lifecycle: the level gate, the
/// formatter, the retained records and the performance timer. Every
/// emission goes through the same steps:
///
/// 1. The level gate drops the record silently unless logging is enabled
///    and the severity reaches the minimum.
/// 2. The record is rendered into its display and persisted forms.
/// 3. The display form goes straight to the [`ConsoleHandler`].
/// 4. The persisted form is appended to the [`RecordStore`].
///
/// # Thread Safety
///
/// Mutating operations take `&mut self`; a `Logger` is meant to be owned by
/// one thread or placed behind a lock. The process-wide instance in
/// [`global`](crate::global) is such a lock.
///
/// # Examples
///
/// ```
/// # use pico_logger::{Logger, LoggerConfig, NullHandler, Severity, log_error, log_info};
/// let mut logger = Logger::new(
///     LoggerConfig::default().with_minimum_level(Severity::Warning),
///     NullHandler,
/// );
///
/// log_info!(logger, "dropped by the gate").unwrap();
/// log_error!(logger, "disk at {}%", 91).unwrap();
///
/// assert_eq!(logger.records().len(), 1);
/// assert!(logger.records().get(0).unwrap().ends_with("disk at 91%"));
/// ```
pub struct Logger {
    policy: LevelPolicy,
    formatter: MessageFormatter,
    store: RecordStore,
    timer: PerformanceTimer,
    handler: Box<dyn ConsoleHandler>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default(), StdoutHandler)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("policy", &self.policy)
            .field("formatter", &self.formatter)
            .field("records", &self.store.len())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger with the given settings and console handler.
    pub fn new(config: LoggerConfig, handler: impl ConsoleHandler + 'static) -> Self {
        Self {
            policy: config.policy(),
            formatter: MessageFormatter::from_config(&config),
            store: RecordStore::with_floor(config.initial_capacity),
            timer: PerformanceTimer::new(),
            handler: Box::new(handler),
        }
    }

    /// Emits one record.
    ///
    /// Records failing the level gate are dropped without output or error.
    /// The only failure is running out of memory while retaining the
    /// persisted form; the display form has already been shown by then.
    ///
    /// In most cases the [`log_message!`](crate::log_message) family of
    /// macros is more convenient, as it fills in the source location.
    pub fn log(
        &mut self,
        severity: Severity,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.policy.allows(severity) {
            return Ok(());
        }
        let rendered = self.formatter.render(severity, &location, args);
        self.emit(rendered)
    }

    /// Emits one record whose severity is a raw numeric code.
    ///
    /// Codes beyond [`Severity::Critical`] pass the threshold whenever
    /// logging is enabled and are labelled `UNKNOWN`.
    pub fn log_code(
        &mut self,
        code: u8,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.policy.allows_code(code) {
            return Ok(());
        }
        let rendered = self.formatter.render_code(code, &location, args);
        self.emit(rendered)
    }

    fn emit(&mut self, rendered: RenderedRecord) -> Result<()> {
        self.handler.handle_display_line(&rendered.display);
        self.store.append(&rendered.persisted)
    }

    pub fn set_logging_enabled(&mut self, enabled: bool) {
        self.policy.set_enabled(enabled);
    }

    pub fn set_minimum_log_level(&mut self, level: Severity) {
        self.policy.set_minimum_level(level);
    }

    /// Current level gate settings.
    pub fn policy(&self) -> LevelPolicy {
        self.policy
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    /// Retained persisted-form records, read only.
    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    /// Arms the performance timer, replacing any earlier start.
    pub fn mark_start(&mut self) {
        self.timer.start();
    }

    /// Reports the time elapsed since [`mark_start`](Self::mark_start).
    ///
    /// When armed, a `METRICS` line naming `label` goes to the console
    /// handler and the duration is returned; the timer stays armed. When
    /// unarmed, an error-level record saying the start time is not defined is
    /// emitted through the normal gate and
    /// [`LoggerError::TimerNotStarted`](crate::LoggerError::TimerNotStarted)
    /// is returned.
    pub fn report_elapsed(&mut self, label: &str) -> Result<Duration> {
        match self.timer.elapsed() {
            Ok(elapsed) => {
                self.handler.handle_display_line(&metrics_line(label, elapsed));
                Ok(elapsed)
            }
            Err(err) => {
                self.log(
                    Severity::Error,
                    crate::location!(),
                    format_args!("Start time not defined."),
                )?;
                Err(err)
            }
        }
    }

    pub fn timer(&self) -> &PerformanceTimer {
        &self.timer
    }

    /// Writes all retained records to `path`, one per line.
    ///
    /// See [`RecordStore::persist_to`].
    pub fn persist_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.store.persist_to(path)
    }

    /// Releases all retained records.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Captures the current stack and shows it on the console.
    ///
    /// Returns the captured frames as well.
    pub fn print_stack_trace(&self) -> Vec<String> {
        let frames = diagnostics::capture_stack_trace();
        self.handler.handle_display_line(STACK_TRACE_HEADER);
        for frame in &frames {
            self.handler.handle_display_line(frame);
        }
        frames
    }

    /// Shows a hex dump of `bytes` on the console.
    pub fn print_memory_dump(&self, label: &str, bytes: &[u8]) {
        for line in diagnostics::memory_dump_lines(label, bytes) {
            self.handler.handle_display_line(&line);
        }
    }
}

/// Logs a record at the given severity.
///
/// With a leading logger expression the record goes to that [`Logger`];
/// without one it goes to the process-wide instance. Either way the macro
/// evaluates to [`Result<()>`](crate::Result).
///
/// # Examples
///
/// ```
/// # use pico_logger::{Logger, LoggerConfig, NullHandler, Severity, log_message};
/// let mut logger = Logger::new(LoggerConfig::default(), NullHandler);
/// log_message!(logger, Severity::Warning, "retrying in {}s", 5).unwrap();
///
/// // Process-wide instance
/// log_message!(Severity::Info, "started").unwrap();
/// ```
#[macro_export]
macro_rules! log_message {
    ($severity:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::log(
            $severity,
            $crate::location!(),
            format_args!($fmt $(, $arg)*),
        )
    };
    ($logger:expr, $severity:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $crate::location!(),
            format_args!($fmt $(, $arg)*),
        )
    };
}

/// Logs an `Info` record. See [`log_message!`].
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($crate::Severity::Info, $fmt $(, $arg)*)
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($logger, $crate::Severity::Info, $fmt $(, $arg)*)
    };
}

/// Logs a `Warning` record. See [`log_message!`].
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($crate::Severity::Warning, $fmt $(, $arg)*)
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($logger, $crate::Severity::Warning, $fmt $(, $arg)*)
    };
}

/// Logs an `Error` record. See [`log_message!`].
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($crate::Severity::Error, $fmt $(, $arg)*)
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($logger, $crate::Severity::Error, $fmt $(, $arg)*)
    };
}

/// Logs a `Critical` record. See [`log_message!`].
#[macro_export]
macro_rules! log_critical {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($crate::Severity::Critical, $fmt $(, $arg)*)
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_message!($logger, $crate::Severity::Critical, $fmt $(, $arg)*)
    };
}
