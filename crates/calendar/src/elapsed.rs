//! Elapsed-day approximation with a fixed offset.

use chrono::NaiveDate;
use tracing::debug;

use crate::clock::Clock;
use crate::date::gregorian_date;
use crate::error::CalendarError;
use crate::period::ElapsedPeriod;

/// Average length of a Gregorian year in days.
pub const AVG_YEAR_DAYS: f64 = 365.25;

/// Average length of a Gregorian month in days.
pub const AVG_MONTH_DAYS: f64 = 30.4375;

/// Fixed offset added to every computed day count.
pub const BASE_OFFSET: i64 = 1000;

/// Approximate elapsed days from `target` to `as_of`, plus [`BASE_OFFSET`].
///
/// The span is decomposed into whole years, months, and days, weighted by
/// the average year and month lengths, and the sum (offset included) is
/// truncated toward zero. The weighting makes this an approximation of a
/// true day count; it drifts by a few days as the span grows.
///
/// A `target` after `as_of` yields negative period components; the result
/// then falls below [`BASE_OFFSET`] and, for spans past roughly three
/// years, below zero.
pub fn offset_days(target: NaiveDate, as_of: NaiveDate) -> i64 {
    let period = ElapsedPeriod::between(target, as_of);
    let weighted = f64::from(period.years()) * AVG_YEAR_DAYS
        + f64::from(period.months()) * AVG_MONTH_DAYS
        + f64::from(period.days())
        + BASE_OFFSET as f64;
    weighted as i64
}

/// Computes the offset day count for a day/month/year triple against the
/// given clock.
///
/// # Errors
///
/// Returns [`CalendarError`] if the triple does not form a valid calendar
/// date.
pub fn days_since(day: u8, month: u8, year: i32, clock: &impl Clock) -> Result<i64, CalendarError> {
    let target = gregorian_date(year, month, day)?;
    let as_of = clock.today();
    let result = offset_days(target, as_of);
    debug!(%target, %as_of, result, "computed offset day count");
    Ok(result)
}
