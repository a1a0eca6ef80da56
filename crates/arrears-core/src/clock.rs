use chrono::{Local, NaiveDate};

/// Source of the reference "today". The core never reads wall-clock time
/// directly, so tests and callers can substitute a fixed date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Calendar date from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
