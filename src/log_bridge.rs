use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use tracing::error;

use crate::global;
use crate::location::SourceLocation;
use crate::severity::Severity;

const UNKNOWN_SOURCE: &str = "<unknown>";

/// Adapter routing records of the `log` facade into the process-wide
/// logger.
///
/// `log` has no critical level and two levels below `Info`; `Debug` and
/// `Trace` records have no counterpart here and are dropped. The function
/// name of the resulting record is the emitting module path, since `log`
/// does not carry function names.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

/// Severity a `log` level maps to, if any.
pub fn severity_for_level(level: Level) -> Option<Severity> {
    match level {
        Level::Error => Some(Severity::Error),
        Level::Warn => Some(Severity::Warning),
        Level::Info => Some(Severity::Info),
        Level::Debug | Level::Trace => None,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        severity_for_level(metadata.level())
            .is_some_and(|severity| global::with_global(|logger| logger.policy().allows(severity)))
    }

    fn log(&self, record: &Record<'_>) {
        let Some(severity) = severity_for_level(record.level()) else {
            return;
        };
        let location = SourceLocation::new(
            record.file_static().unwrap_or(UNKNOWN_SOURCE),
            record.line().unwrap_or(0),
            record.module_path_static().unwrap_or(UNKNOWN_SOURCE),
        );
        if let Err(e) = global::log(severity, location, *record.args()) {
            error!(error = %e, "dropped record from the log facade");
        }
    }

    fn flush(&self) {}
}

/// Installs [`LogBridge`] as the `log` facade's logger.
///
/// Fails if another logger was installed first.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE).map(|()| log::set_max_level(LevelFilter::Info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(severity_for_level(Level::Error), Some(Severity::Error));
        assert_eq!(severity_for_level(Level::Warn), Some(Severity::Warning));
        assert_eq!(severity_for_level(Level::Info), Some(Severity::Info));
        assert_eq!(severity_for_level(Level::Debug), None);
        assert_eq!(severity_for_level(Level::Trace), None);
    }
}
