use chrono::{NaiveDate, Utc};

/// Source of the calendar date stamped on submitted reviews.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
