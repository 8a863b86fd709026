//! Wall-clock access — the only place the core asks what time it is.
//!
//! Generation needs `today` for the date window and seed minting needs a
//! millisecond timestamp. Both come through `Clock` so tests can pin them.

use chrono::{Local, NaiveDate, Utc};

pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant. Used in tests and replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub today:  NaiveDate,
    pub millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate, millis: i64) -> Self {
        Self { today, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate { self.today }
    fn now_millis(&self) -> i64  { self.millis }
}
