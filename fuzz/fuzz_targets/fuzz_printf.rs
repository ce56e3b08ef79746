#![no_main]
use conlog::Arg;
use conlog::fmt::sprintf;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any format string, with too few or too many arguments
    let args = [
        Arg::from("text"),
        Arg::from(-42),
        Arg::from(u64::MAX),
        Arg::from(1.5e300),
        Arg::from(true),
        Arg::from('ß'),
    ];
    let _ = sprintf(data, &args);
    let _ = sprintf(data, &[]);
});
