use criterion::{black_box, criterion_group, criterion_main, Criterion};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use pico_logger::{log_info, Logger, LoggerConfig, NullHandler};
use std::fmt;
use std::sync::Once;
use std::time::Instant;
use tempfile::tempdir;

const ITERATIONS: usize = 10_000;

static LOG4RS_INIT: Once = Once::new();

struct TestEvent {
    id: i32,
    active: bool,
    large_number: u64,
    description: &'static str,
}

impl fmt::Display for TestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event[id={}, active={}, large_number={}, desc={}]",
            self.id, self.active, self.large_number, self.description
        )
    }
}

const EVENT: TestEvent = TestEvent {
    id: 42,
    active: true,
    large_number: u64::MAX,
    description: "CPU: 95%, Memory: 2.5GB, Network: 1.2Gbps",
};

fn setup_log4rs(log_file: &str) {
    LOG4RS_INIT.call_once(|| {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("[{d(%Y-%m-%d %H:%M:%S)}] {l} [{f}:{L}] {M}: {m}{n}")))
            .append(false)
            .build(log_file)
            .unwrap();

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(LevelFilter::Info))
            .unwrap();

        log4rs::init_config(config).unwrap();
    });
}

fn bench_in_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("In-memory emission");

    group.bench_function("pico_logger_retain", |b| {
        b.iter(|| {
            let mut logger = Logger::new(LoggerConfig::default(), NullHandler);
            for i in 0..ITERATIONS {
                log_info!(logger, "Test perf: iteration={}, event={}", i, EVENT).unwrap();
            }
            black_box(logger.records().len())
        });
    });

    group.finish();
}

fn bench_logging_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logging Comparison");
    group.sample_size(10); // Fewer samples due to I/O operations

    let dir = tempdir().unwrap();
    let pico_file = dir.path().join("pico.log");
    let log4rs_file = dir.path().join("log4rs.log");
    setup_log4rs(log4rs_file.to_str().unwrap());

    group.bench_function("pico_vs_log4rs_vs_tracing", |b| {
        b.iter(|| {
            // Retain in memory, then save once
            let pico_start = Instant::now();
            let mut logger = Logger::new(LoggerConfig::default(), NullHandler);
            for i in 0..ITERATIONS {
                log_info!(logger, "Test perf: iteration={}, event={}", i, EVENT).unwrap();
            }
            logger.persist_to(&pico_file).unwrap();
            let pico_duration = pico_start.elapsed();

            // log4rs writes every record through to its file
            let log4rs_start = Instant::now();
            for i in 0..ITERATIONS {
                log::info!("Test perf: iteration={}, event={}", i, EVENT);
            }
            let log4rs_duration = log4rs_start.elapsed();

            // tracing with a non-blocking file appender
            let appender = tracing_appender::rolling::never(dir.path(), "tracing.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            let tracing_start = Instant::now();
            tracing::subscriber::with_default(subscriber, || {
                for i in 0..ITERATIONS {
                    tracing::info!("Test perf: iteration={}, event={}", i, EVENT);
                }
            });
            drop(guard);
            let tracing_duration = tracing_start.elapsed();

            println!("\nPerformance comparison ({} iterations):", ITERATIONS);
            println!("pico_logger (retain + persist): {:?}", pico_duration);
            println!("log4rs (file): {:?}", log4rs_duration);
            println!("tracing-appender (file): {:?}", tracing_duration);

            black_box((pico_duration, log4rs_duration, tracing_duration))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_in_memory, bench_logging_comparison);
criterion_main!(benches);
