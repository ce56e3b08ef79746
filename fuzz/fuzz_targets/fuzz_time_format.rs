#![no_main]
use conlog::fmt::render;
use conlog::{Arg, Clock, FixedClock, LogRecord, Settings, Severity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary layouts must render (falling back if invalid), never panic
    let args = [Arg::from("fuzz")];
    let record = LogRecord::line(Severity::Message, &args);
    let settings = Settings::new().time_format(data).max_line_size(data.len() % 64);
    let _ = render(&record, &settings, &FixedClock::from_unix(0).now());
});
