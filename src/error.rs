use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the logging facility.
///
/// Gated-out records and truncated text are not errors; they are silent by
/// contract. Everything that can actually go wrong ends up here.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The record store could not grow, or a record could not be copied into
    /// an owned entry.
    #[error("failed to allocate memory for log entries: {0}")]
    Allocation(#[from] TryReserveError),

    /// The persistence target could not be opened for writing.
    #[error("failed to open log file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened persistence target failed part way.
    #[error("failed to write log file: {0}")]
    Write(#[from] io::Error),

    /// Elapsed time was requested before the performance timer was armed.
    #[error("start time not defined")]
    TimerNotStarted,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LoggerError>;
