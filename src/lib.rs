//! # Pico Logger
//!
//! A small embeddable logging facility:
//!
//! * **Leveled records**: `Info`, `Warning`, `Error` and `Critical`, gated by
//!   an on/off switch and a minimum severity
//! * **Two renderings**: an accented line for the console and a plain line
//!   retained in memory
//! * **Retained records**: every emitted record is kept, in order, until
//!   cleared or saved to a file
//! * **Diagnostics**: a single-slot performance timer, stack traces and hex
//!   dumps
//!
//! ## Main Components
//!
//! * `Logger`: the context object tying everything together
//! * `LevelPolicy`: the level gate
//! * `MessageFormatter`: renders display and persisted forms
//! * `RecordStore`: the growable store of persisted lines
//! * `PerformanceTimer`: armed/unarmed stopwatch
//! * `diagnostics`: stack trace capture and memory dumps
//! * `global`: a mutex-guarded process-wide `Logger`
//! * `log_bridge`: routes the `log` facade into the process-wide `Logger`
//!
//! ## Quick Start
//!
//! ```
//! use pico_logger::{log_error, log_info, log_warning, Logger, LoggerConfig, Severity, StdoutHandler};
//!
//! let mut logger = Logger::new(LoggerConfig::default(), StdoutHandler);
//!
//! log_info!(logger, "service starting").unwrap();
//! logger.set_minimum_log_level(Severity::Warning);
//! log_info!(logger, "not shown, not retained").unwrap();
//! log_warning!(logger, "cache at {}%", 85).unwrap();
//! log_error!(logger, "disk at {}%", 91).unwrap();
//!
//! logger.mark_start();
//! // ... work ...
//! logger.report_elapsed("warmup").unwrap();
//!
//! assert_eq!(logger.records().len(), 3);
//! for line in logger.records().iter() {
//!     println!("{}", line);
//! }
//! ```
//!
//! Records can be saved at any time with `Logger::persist_to`, which writes
//! one line per record and replaces the target file.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod global;
pub mod location;
pub mod log_bridge;
pub mod logger;
pub mod perf_timer;
pub mod record_store;
pub mod severity;

pub use config::{LoggerConfig, DISPLAY_LINE_LIMIT, PERSISTED_LINE_LIMIT, STORE_CAPACITY_FLOOR};
pub use diagnostics::{capture_stack_trace, dump_memory};
pub use error::{LoggerError, Result};
pub use formatter::{MessageFormatter, RenderedRecord};
pub use location::SourceLocation;
pub use log_bridge::{init_log_bridge, LogBridge};
pub use logger::{ConsoleHandler, Logger, NullHandler, StdoutHandler};
pub use perf_timer::{PerformanceTimer, TimerState};
pub use record_store::RecordStore;
pub use severity::{Accent, LevelPolicy, Severity};
