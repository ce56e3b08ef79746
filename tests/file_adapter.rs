use conlog::adapter::{AdapterConfig, FileAdapter, LogRecord};
use conlog::fmt::layout;
use conlog::{Adapter, Arg, BufferOutput, Clock, FixedClock, Logger, Severity};
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const TS: i64 = 1_498_405_744;

fn stamp(layout: &str) -> String {
    FixedClock::from_unix(TS).now().format(layout).to_string()
}

fn path_config(path: &std::path::Path) -> AdapterConfig {
    let mut config = AdapterConfig::new();
    config.insert(
        "path".to_string(),
        Value::String(path.to_string_lossy().into_owned()),
    );
    config
}

#[test]
fn file_adapter_writes_plain_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("logs").join("app.log");

    let logger = Logger::builder()
        .clock(FixedClock::from_unix(TS))
        .output(BufferOutput::new())
        .file()
        .path(path.to_string_lossy())
        .done()
        .build();

    logger.println(&["one".into()]);
    logger.errorf("%d failed", &[2.into()]);

    let ts = stamp(layout::DEFAULT);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        format!("{ts} [msg] one\n{ts} [error] 2 failed\n")
    );
}

#[test]
fn file_adapter_honors_time_format_key() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rfc.log");

    let logger = Logger::builder()
        .clock(FixedClock::from_unix(TS))
        .output(BufferOutput::new())
        .file()
        .name("audit")
        .path(path.to_string_lossy())
        .time_format(layout::RFC3339)
        .done()
        .build();

    logger.warningln(&["w".into()]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{} [warning] w\n", stamp(layout::RFC3339)));
    assert!(logger.adapters().contains("audit"));
}

#[test]
fn file_adapter_strips_escapes_from_arguments() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("plain.log");
    let adapter = FileAdapter::with_clock(Arc::new(FixedClock::from_unix(TS)));

    let args = [Arg::from("\x1b[1mbold\x1b[0m")];
    adapter
        .write(&LogRecord::line(Severity::Message, &args), &path_config(&path))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{} [msg] bold\n", stamp(layout::DEFAULT)));
}

#[test]
fn file_adapter_without_path_is_idle() {
    let adapter = FileAdapter::new();
    let args = [Arg::from("x")];
    assert!(
        adapter
            .write(&LogRecord::line(Severity::Message, &args), &AdapterConfig::new())
            .is_ok()
    );
}

#[test]
fn file_adapter_follows_config_changes() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first.log");
    let second = tmp.path().join("second.log");

    let logger = Logger::builder()
        .output(BufferOutput::new())
        .file()
        .path(first.to_string_lossy())
        .done()
        .build();

    logger.println(&["a".into()]);
    assert!(logger.set_adapter_config("file", path_config(&second)));
    logger.println(&["b".into()]);

    assert!(fs::read_to_string(&first).unwrap().ends_with("[msg] a\n"));
    assert!(fs::read_to_string(&second).unwrap().ends_with("[msg] b\n"));
}

#[test]
fn unwritable_path_does_not_fail_the_log_call() {
    let tmp = TempDir::new().unwrap();
    // A directory can't be opened for appending
    let adapter = FileAdapter::new();
    let args = [Arg::from("x")];
    let record = LogRecord::line(Severity::Message, &args);

    assert!(adapter.write(&record, &path_config(tmp.path())).is_err());
    adapter.handle(&record, &path_config(tmp.path()));
}
