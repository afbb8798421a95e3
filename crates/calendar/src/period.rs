//! Calendar period decomposition between two dates.

use chrono::{Datelike, Months, NaiveDate};

use crate::date::month_length;

/// A date span decomposed into whole years, whole months, and whole days,
/// largest unit first.
///
/// For `start <= end` every component is non-negative, with months in
/// 0..=11 and days bounded by the relevant month length. For a reversed
/// interval the decomposition mirrors: every component is non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElapsedPeriod {
    years: i32,
    months: i32,
    days: i32,
}

/// Months since year 0, counting `month` as 0-based.
fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

impl ElapsedPeriod {
    /// Decomposes the span from `start` to `end` into whole years, whole
    /// months, and whole days.
    ///
    /// The month delta is taken first and then borrowed against when the
    /// day-of-month goes negative, so the day remainder is always counted
    /// from a real date. Shifting `start` forward by whole months clamps
    /// the day-of-month to the target month's length (Jan 31 plus one
    /// month lands on Feb 28 or 29).
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let mut total_months = proleptic_month(end) - proleptic_month(start);
        let mut days = i64::from(end.day()) - i64::from(start.day());
        if total_months > 0 && days < 0 {
            total_months -= 1;
            // Non-negative after the decrement, and the shifted date stays
            // on or before `end`, so the addition cannot leave range.
            let shifted = start
                .checked_add_months(Months::new(total_months as u32))
                .expect("start plus whole months is no later than end");
            days = end.signed_duration_since(shifted).num_days();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(month_length(end.year(), end.month()));
        }
        Self {
            years: (total_months / 12) as i32,
            months: (total_months % 12) as i32,
            days: days as i32,
        }
    }

    /// Returns the whole-year component.
    pub fn years(self) -> i32 {
        self.years
    }

    /// Returns the whole-month remainder after years.
    pub fn months(self) -> i32 {
        self.months
    }

    /// Returns the whole-day remainder after years and months.
    pub fn days(self) -> i32 {
        self.days
    }

    /// Returns `true` if all three components are zero.
    pub fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}
