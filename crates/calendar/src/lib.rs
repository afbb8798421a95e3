//! # aion-calendar
//!
//! Calendar period arithmetic and the offset elapsed-day computation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"gregorian_date()"| B["NaiveDate"]
//!     C["Clock::today()"] --> D["NaiveDate (as_of)"]
//!     B -->|"ElapsedPeriod::between()"| E["years / months / days"]
//!     D -->|"ElapsedPeriod::between()"| E
//!     E -->|"offset_days()"| F["i64"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use aion_calendar::{FixedClock, SystemClock, days_since, gregorian_date};
//!
//! // Against the real clock:
//! let n = days_since(15, 6, 2022, &SystemClock)?;
//!
//! // Against a frozen date:
//! let today = gregorian_date(2023, 6, 15)?;
//! let n = days_since(15, 6, 2022, &FixedClock(today))?;
//! assert_eq!(n, 1365); // one whole year: trunc(365.25) + 1000
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian validation and date construction |
//! | `period` | Year/month/day span decomposition |
//! | `clock` | Injectable current-date source |
//! | `elapsed` | Weighted elapsed-day computation with fixed offset |
//! | `error` | Error types |

mod clock;
mod date;
mod elapsed;
mod error;
mod period;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{days_in_month, gregorian_date, is_leap_year};
pub use elapsed::{AVG_MONTH_DAYS, AVG_YEAR_DAYS, BASE_OFFSET, days_since, offset_days};
pub use error::CalendarError;
pub use period::ElapsedPeriod;
