//! Tests for severities and output kinds.

use conlog::fmt::colorize;
use conlog::{Color, OutputKind, Severity};

#[test]
fn severity_tags() {
    assert_eq!(Severity::Message.to_string(), "msg");
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Debug.to_string(), "debug");
}

#[test]
fn severity_colors() {
    assert_eq!(Severity::Message.color().fg_ansi(), "\x1b[37m");
    assert_eq!(Severity::Error.color().fg_ansi(), "\x1b[91m");
    assert_eq!(Severity::Warning.color().fg_ansi(), "\x1b[93m");
    assert_eq!(Severity::Debug.color().fg_ansi(), "\x1b[96m");
    assert_eq!(Color::RESET, "\x1b[0;00m");
}

#[test]
fn colorize_wraps_in_color_and_reset() {
    assert_eq!(colorize("hi", Color::BRIGHT_RED), "\x1b[91mhi\x1b[0;00m");
    assert_eq!(colorize("", Color::WHITE), "\x1b[37m\x1b[0;00m");
}

#[test]
fn severity_from_str() {
    assert_eq!("msg".parse::<Severity>().unwrap(), Severity::Message);
    assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Message);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
}

#[test]
fn severity_from_str_invalid() {
    let err = "trace".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown severity: 'trace'");
}

#[test]
fn severity_all_is_distinct() {
    let all = Severity::all();
    assert_eq!(all.len(), 4);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.color(), b.color());
        }
    }
}

#[test]
fn only_lines_terminate() {
    assert_eq!(OutputKind::Line.terminator(), "\n");
    assert_eq!(OutputKind::Formatted.terminator(), "");
}
