//! Error types for the aion-calendar crate.

/// Error type for all fallible operations in the aion-calendar crate.
///
/// This enum covers validation failures for month numbers and
/// day-within-month values in the proleptic Gregorian calendar, plus
/// years that fall outside the representable date range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when the year is outside the range representable by the
    /// underlying date type.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i32,
    },
}
