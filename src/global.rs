//! Process-wide logger instance.
//!
//! Applications that prefer not to thread a [`Logger`] through their code
//! can use the free functions of this module, or the logging macros without
//! a logger argument. They all act on one lazily created instance with the
//! default configuration and a [`StdoutHandler`](crate::StdoutHandler).
//!
//! # Thread Safety
//!
//! The instance sits behind a mutex, so it can be used from any thread.
//! Records from different threads are retained in the order the lock was
//! taken. The lock is not reentrant: a [`ConsoleHandler`](crate::ConsoleHandler)
//! installed here must not log through this module itself.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::error::Result;
use crate::location::SourceLocation;
use crate::logger::Logger;
use crate::severity::Severity;

lazy_static! {
    static ref GLOBAL_LOGGER: Mutex<Logger> = Mutex::new(Logger::default());
}

/// Runs `f` with exclusive access to the process-wide logger.
///
/// # Examples
///
/// ```
/// # use pico_logger::global::with_global;
/// let retained = with_global(|logger| logger.records().len());
/// # let _ = retained;
/// ```
pub fn with_global<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let mut logger = GLOBAL_LOGGER.lock();
    f(&mut logger)
}

/// Replaces the process-wide logger, returning the previous one.
///
/// Useful to give the process-wide instance a different configuration or
/// console handler.
pub fn install(logger: Logger) -> Logger {
    std::mem::replace(&mut *GLOBAL_LOGGER.lock(), logger)
}

/// See [`Logger::log`].
pub fn log(severity: Severity, location: SourceLocation, args: fmt::Arguments<'_>) -> Result<()> {
    GLOBAL_LOGGER.lock().log(severity, location, args)
}

/// See [`Logger::log_code`].
pub fn log_code(code: u8, location: SourceLocation, args: fmt::Arguments<'_>) -> Result<()> {
    GLOBAL_LOGGER.lock().log_code(code, location, args)
}

pub fn set_logging_enabled(enabled: bool) {
    GLOBAL_LOGGER.lock().set_logging_enabled(enabled);
}

pub fn set_minimum_log_level(level: Severity) {
    GLOBAL_LOGGER.lock().set_minimum_log_level(level);
}

/// See [`Logger::mark_start`].
pub fn mark_start() {
    GLOBAL_LOGGER.lock().mark_start();
}

/// See [`Logger::report_elapsed`].
pub fn report_elapsed(label: &str) -> Result<Duration> {
    GLOBAL_LOGGER.lock().report_elapsed(label)
}

/// See [`Logger::persist_to`].
pub fn persist_to(path: impl AsRef<Path>) -> Result<()> {
    GLOBAL_LOGGER.lock().persist_to(path)
}

/// See [`Logger::clear`].
pub fn clear() {
    GLOBAL_LOGGER.lock().clear();
}

/// See [`Logger::print_stack_trace`].
pub fn print_stack_trace() -> Vec<String> {
    GLOBAL_LOGGER.lock().print_stack_trace()
}

/// See [`Logger::print_memory_dump`].
pub fn print_memory_dump(label: &str, bytes: &[u8]) {
    GLOBAL_LOGGER.lock().print_memory_dump(label, bytes);
}
