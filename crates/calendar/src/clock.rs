//! Clock abstraction for capturing the current date.

use chrono::{Local, NaiveDate};

/// Source of the current local date.
///
/// The elapsed-day computation only needs date granularity, so the clock
/// surface is a single `today` query. Production code uses [`SystemClock`];
/// tests and reproducible runs substitute [`FixedClock`].
pub trait Clock {
    /// Returns the current date as seen by this clock.
    fn today(&self) -> NaiveDate;
}

/// Reads the host system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(FixedClock(d).today(), d);
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn system_clock_is_plausible() {
        // No frozen reference for the real clock; bound it loosely instead.
        let today = SystemClock.today();
        let floor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(today > floor);
    }

    #[test]
    fn clocks_are_object_safe() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let clock: &dyn Clock = &FixedClock(d);
        assert_eq!(clock.today(), d);
    }
}
