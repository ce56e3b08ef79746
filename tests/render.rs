//! Tests for line rendering: colors, timestamps, truncation and the debug tag.

use conlog::fmt::{layout, render, render_plain};
use conlog::{Arg, Clock, FixedClock, LogRecord, Settings, Severity};

const TS: i64 = 1_498_405_744;

fn stamp(layout: &str) -> String {
    FixedClock::from_unix(TS).now().format(layout).to_string()
}

fn render_with(record: &LogRecord<'_>, settings: &Settings) -> String {
    render(record, settings, &FixedClock::from_unix(TS).now())
}

#[test]
fn line_output_per_severity() {
    let ts = stamp(layout::DEFAULT);
    let args = [Arg::from("log test")];
    let settings = Settings::default();

    let cases = [
        (Severity::Message, "\x1b[37m", "[msg]"),
        (Severity::Error, "\x1b[91m", "[error]"),
        (Severity::Warning, "\x1b[93m", "[warning]"),
        (Severity::Debug, "\x1b[96m", "[debug]"),
    ];

    for (severity, color, tag) in cases {
        let out = render_with(&LogRecord::line(severity, &args), &settings);
        assert_eq!(out, format!("{color}{ts} {tag} log test\x1b[0;00m\n"));
    }
}

#[test]
fn formatted_output_has_no_newline() {
    let ts = stamp(layout::DEFAULT);
    let args = [Arg::from("formatted"), Arg::from("log"), Arg::from(1.1234)];
    let record = LogRecord::formatted(Severity::Error, "%s %s %.2f", &args);

    let out = render_with(&record, &Settings::default());
    assert_eq!(out, format!("\x1b[91m{ts} [error] formatted log 1.12\x1b[0;00m"));
}

#[test]
fn rendering_is_deterministic_with_fixed_clock() {
    let args = [Arg::from("same"), Arg::from(1)];
    let record = LogRecord::line(Severity::Warning, &args);
    let settings = Settings::new().max_line_size(12);

    assert_eq!(render_with(&record, &settings), render_with(&record, &settings));
}

#[test]
fn long_lines_are_cut_before_the_reset() {
    let ts = stamp(layout::DEFAULT);
    let body = "0123456789012345678901234567890123456789";
    let args = [Arg::from(body)];
    let settings = Settings::new().max_line_size(30);

    let full = format!("{ts} [msg] {body}");
    let head: String = full.chars().take(30).collect();

    let formatted = render_with(&LogRecord::formatted(Severity::Message, body, &[]), &settings);
    assert_eq!(formatted, format!("\x1b[37m{head}...\x1b[0;00m"));

    let line = render_with(&LogRecord::line(Severity::Message, &args), &settings);
    assert_eq!(line, format!("\x1b[37m{head}...\x1b[0;00m\n"));
}

#[test]
fn lines_at_the_limit_are_untouched() {
    let ts = stamp(layout::DEFAULT);
    let content = format!("{ts} [msg] abc");
    let args = [Arg::from("abc")];
    let settings = Settings::new().max_line_size(content.chars().count());

    let out = render_with(&LogRecord::line(Severity::Message, &args), &settings);
    assert_eq!(out, format!("\x1b[37m{content}\x1b[0;00m\n"));
}

#[test]
fn truncation_respects_char_boundaries() {
    let args = [Arg::from("ééééééééééééééééééééé")];
    let settings = Settings::new().max_line_size(30);

    let out = render_with(&LogRecord::line(Severity::Message, &args), &settings);
    let inner = out
        .trim_start_matches("\x1b[37m")
        .trim_end_matches("\x1b[0;00m\n")
        .trim_end_matches("...");
    assert_eq!(inner.chars().count(), 30);
}

#[test]
fn time_format_only_changes_the_timestamp() {
    let args = [Arg::from("testing a log message")];
    let record = LogRecord::line(Severity::Message, &args);

    let default = render_with(&record, &Settings::default());
    let rfc = render_with(&record, &Settings::new().time_format(layout::RFC3339));

    let ts_default = stamp(layout::DEFAULT);
    let ts_rfc = stamp(layout::RFC3339);
    assert_eq!(default.replacen(&ts_default, &ts_rfc, 1), rfc);
}

#[test]
fn invalid_layout_falls_back_to_default() {
    let args = [Arg::from("x")];
    let record = LogRecord::line(Severity::Message, &args);

    let out = render_with(&record, &Settings::new().time_format("%Q"));
    assert!(out.starts_with(&format!("\x1b[37m{}", stamp(layout::DEFAULT))));
}

#[test]
fn debug_tag_carries_location() {
    let ts = stamp(layout::DEFAULT);
    let args = [Arg::from("log test")];
    let location = std::panic::Location::caller();
    let record = LogRecord::line(Severity::Debug, &args).at(location);

    let out = render_with(&record, &Settings::default());
    assert_eq!(
        out,
        format!(
            "\x1b[96m{ts} [debug] render.rs:{} log test\x1b[0;00m\n",
            location.line()
        )
    );
}

#[test]
fn location_is_ignored_for_other_severities() {
    let args = [Arg::from("x")];
    let record = LogRecord::line(Severity::Error, &args).at(std::panic::Location::caller());
    assert_eq!(record.tag(), "[error]");
}

#[test]
fn plain_rendering_has_no_escapes() {
    let ts = stamp(layout::DEFAULT);
    let args = [Arg::from(7)];
    let record = LogRecord::formatted(Severity::Warning, "%d left", &args);

    let out = render_plain(&record, layout::DEFAULT, &FixedClock::from_unix(TS).now());
    assert_eq!(out, format!("{ts} [warning] 7 left"));
}

#[test]
fn validate_rejects_unknown_specifiers() {
    assert!(layout::validate(layout::DEFAULT).is_ok());
    assert!(layout::validate(layout::RFC3339).is_ok());
    assert!(layout::validate(layout::KITCHEN).is_ok());
    assert!(layout::validate("%Q").is_err());
}
