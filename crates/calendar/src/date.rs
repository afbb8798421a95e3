//! Gregorian date validation and construction.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar (divisible by 4, except centuries not divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of the given month, assuming `month` is already in 1..=12.
pub(crate) fn month_length(year: i32, month: u32) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, u32::from(month)))
}

/// Constructs a validated [`NaiveDate`] from a year, month, and day.
///
/// Validation is performed here so the error carries the offending
/// components; the underlying date constructor only has to handle the
/// year range.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
/// [`CalendarError::InvalidDay`] if `day` is not valid for the given month
/// and year (leap years included), or [`CalendarError::YearOutOfRange`]
/// if `year` exceeds the range representable by [`NaiveDate`].
pub fn gregorian_date(year: i32, month: u8, day: u8) -> Result<NaiveDate, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .ok_or(CalendarError::YearOutOfRange { year })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn leap_year_divisible_by_4() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn leap_year_century_rule() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn days_in_month_common_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (m, &len) in (1..=12u8).zip(expected.iter()) {
            assert_eq!(days_in_month(2023, m).unwrap(), len, "month {m}");
        }
    }

    #[test]
    fn days_in_month_leap_february() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn days_in_month_invalid_month() {
        assert_eq!(
            days_in_month(2023, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2023, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn gregorian_date_valid() {
        let date = gregorian_date(2023, 6, 15).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn gregorian_date_invalid_month() {
        assert_eq!(
            gregorian_date(2023, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn gregorian_date_day_zero() {
        assert_eq!(
            gregorian_date(2023, 1, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 1,
                year: 2023,
                max_day: 31,
            }
        );
    }

    #[test]
    fn gregorian_date_april_31() {
        assert_eq!(
            gregorian_date(2023, 4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                year: 2023,
                max_day: 30,
            }
        );
    }

    #[test]
    fn gregorian_date_leap_day() {
        assert!(gregorian_date(2024, 2, 29).is_ok());
        assert_eq!(
            gregorian_date(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn gregorian_date_negative_year() {
        let date = gregorian_date(-44, 3, 15).unwrap();
        assert_eq!(date.year(), -44);
    }

    #[test]
    fn gregorian_date_year_out_of_range() {
        assert_eq!(
            gregorian_date(i32::MAX, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
    }
}
