use conlog::adapter::{AdapterConfig, LogRecord, from_fn};
use conlog::{Arg, BufferOutput, FixedClock, Logger};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

fn quiet_logger() -> (Logger, BufferOutput) {
    let console = BufferOutput::new();
    let logger = Logger::builder()
        .clock(FixedClock::from_unix(1_498_405_744))
        .output(console.clone())
        .build();
    (logger, console)
}

fn bench_console_only(c: &mut Criterion) {
    let (logger, console) = quiet_logger();
    let args = [Arg::from("benchmark"), Arg::from("message")];

    c.bench_function("Logger::println", |b| {
        b.iter(|| {
            logger.println(black_box(&args));
            let _ = console.take();
        });
    });
}

fn bench_suppressed_debug(c: &mut Criterion) {
    let (logger, _console) = quiet_logger();
    let args = [Arg::from("never rendered")];

    c.bench_function("Logger::debugln (off)", |b| {
        b.iter(|| logger.debugln(black_box(&args)));
    });
}

fn bench_with_adapters(c: &mut Criterion) {
    let (logger, console) = quiet_logger();
    for i in 0..4 {
        logger.add_adapter(
            format!("noop-{i}"),
            from_fn(|record: &LogRecord<'_>, _: &AdapterConfig| {
                black_box(record.body());
            }),
            AdapterConfig::new(),
        );
    }
    let args = [Arg::from(7), Arg::from("retries")];

    c.bench_function("Logger::warningf (4 adapters)", |b| {
        b.iter(|| {
            logger.warningf(black_box("%d %s"), black_box(&args));
            let _ = console.take();
        });
    });
}

fn bench_file_adapter(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().join("bench.log");
    let logger = Logger::builder()
        .output(BufferOutput::new())
        .file()
        .path(path.to_string_lossy())
        .done()
        .build();
    let args = [Arg::from("benchmark log message")];

    c.bench_function("FileAdapter::handle", |b| {
        b.iter(|| logger.println(black_box(&args)));
    });
}

criterion_group!(
    benches,
    bench_console_only,
    bench_suppressed_debug,
    bench_with_adapters,
    bench_file_adapter
);
criterion_main!(benches);
