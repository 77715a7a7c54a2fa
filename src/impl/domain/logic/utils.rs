use chrono::{Duration, NaiveDate};

use crate::errors::{ExportError, Result};

/// Returns the first day of the given month.
pub(crate) fn month_start(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ExportError::InvalidPeriod { month, year })
}

/// Returns the last day of the given month, computed as the first day of
/// the following month minus one day.
pub(crate) fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    Ok(month_start(next_year, next_month)? - Duration::days(1))
}
