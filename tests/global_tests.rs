use pico_logger::global::{self, with_global};
use pico_logger::{
    log_critical, log_error, log_info, log_message, ConsoleHandler, Logger, LoggerConfig, LoggerError,
    Severity,
};
use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::tempdir;

#[derive(Clone, Default)]
struct CollectingHandler {
    lines: Arc<Mutex<Vec<String>>>,
}

impl ConsoleHandler for CollectingHandler {
    fn handle_display_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

// The process-wide instance is shared by every test in this binary, so the
// whole lifecycle is exercised from a single test.
#[test]
fn test_process_wide_lifecycle() {
    let console = CollectingHandler::default();
    global::install(Logger::new(LoggerConfig::default().with_colorize(false), console.clone()));

    // Defaults
    let policy = with_global(|logger| logger.policy());
    assert!(policy.is_enabled());
    assert_eq!(policy.minimum_level(), Severity::Info);

    // Gate
    global::set_minimum_log_level(Severity::Warning);
    log_info!("dropped").unwrap();
    log_error!("disk at {}%", 91).unwrap();
    log_message!(Severity::Warning, "low memory").unwrap();
    assert_eq!(with_global(|logger| logger.records().len()), 2);

    global::set_logging_enabled(false);
    log_critical!("dropped while disabled").unwrap();
    assert_eq!(with_global(|logger| logger.records().len()), 2);
    global::set_logging_enabled(true);
    global::set_minimum_log_level(Severity::Info);

    // Timer
    assert!(matches!(global::report_elapsed("early"), Err(LoggerError::TimerNotStarted)));
    global::mark_start();
    assert!(global::report_elapsed("work").is_ok());
    assert_eq!(with_global(|logger| logger.records().len()), 3);

    // Other threads go through the same lock
    let handles: Vec<_> = (0..4)
        .map(|i| thread::spawn(move || log_info!("from thread {}", i).unwrap()))
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(with_global(|logger| logger.records().len()), 7);

    // Persist
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.log");
    global::persist_to(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let persisted: Vec<String> = contents.lines().map(str::to_string).collect();
    let retained: Vec<String> = with_global(|logger| logger.records().iter().map(str::to_string).collect());
    assert_eq!(persisted, retained);
    assert!(persisted[0].ends_with("disk at 91%"));
    assert!(persisted[2].ends_with("Start time not defined."));

    // Diagnostics
    global::print_memory_dump("word", &[0x2a, 0, 0, 0]);
    global::print_stack_trace();
    {
        let lines = console.lines.lock().unwrap();
        assert!(lines.iter().any(|l| l == "Memory dump (word):"));
        assert!(lines.iter().any(|l| l == "2a 00 00 00"));
        assert!(lines.iter().any(|l| l.starts_with("METRICS Function work took ")));
        assert!(lines.iter().any(|l| l == "Stack trace:"));
    }

    // Teardown
    global::clear();
    global::clear();
    assert_eq!(with_global(|logger| logger.records().len()), 0);
    assert_eq!(with_global(|logger| logger.records().capacity()), 0);
}
