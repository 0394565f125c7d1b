//! Date resolution for a budgeting period
//!
//! Turns calendar dates into the plain day numbers the allocator works with,
//! and picks which day of the ledger counts as "today".

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{BudgetError, BudgetResult};
use crate::models::DayRecord;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// First and last day-of-month of the active period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start_day: u32,
    pub last_day: u32,
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of days in the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| (first_of_next - Duration::days(1)).day())
        .unwrap_or(31)
}

/// Resolve the day range for a period that runs through the end of `today`'s month
///
/// Only the day-of-month of `start_date` is used, even when it falls in a
/// different month; a start day past the end of the month is left for the
/// allocator to reject.
pub fn resolve_period(today: NaiveDate, start_date: Option<NaiveDate>) -> DayRange {
    DayRange {
        start_day: start_date.map(|d| d.day()).unwrap_or(1),
        last_day: last_day_of_month(today),
    }
}

/// Parse a user-supplied date
///
/// Formats supported: "2025-01-15", "15.01.2025", "today".
pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD or DD.MM.YYYY",
                s
            ))
        })
}

/// Index of the record for `today`, or 0 when today is not in the sequence
pub fn current_day_index(days: &[DayRecord], today: NaiveDate) -> usize {
    days.iter()
        .position(|d| d.day == today.day())
        .unwrap_or(0)
}

/// Format the month containing `date`, e.g. "October 2026"
pub fn format_month_friendly(date: NaiveDate) -> String {
    let month_name = MONTH_NAMES[date.month0() as usize];
    format!("{} {}", month_name, date.year())
}
