//! Where timestamps come from. Tests swap in a fixed instant so rendered lines are byte-stable.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Provides the instant stamped onto each rendered line.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }

    /// Unix seconds are the easiest way for tests to pin an instant.
    /// Out-of-range values pin the epoch.
    #[must_use]
    pub fn from_unix(secs: i64) -> Self {
        let instant = Local
            .timestamp_opt(secs, 0)
            .earliest()
            .unwrap_or_else(|| DateTime::<Local>::from(DateTime::<Utc>::UNIX_EPOCH));
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Any `Fn() -> DateTime<Local>` closure can act as a clock.
pub struct FnClock<F>(F);

/// Wraps a closure as a [`Clock`].
pub const fn from_fn<F>(f: F) -> FnClock<F>
where
    F: Fn() -> DateTime<Local> + Send + Sync,
{
    FnClock(f)
}

impl<F> Clock for FnClock<F>
where
    F: Fn() -> DateTime<Local> + Send + Sync,
{
    fn now(&self) -> DateTime<Local> {
        (self.0)()
    }
}
