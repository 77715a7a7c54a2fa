use chrono::{Datelike, NaiveDate};

use crate::errors::{ExportError, Result};

/// The calendar month one run exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportPeriod {
    year: i32,
    month: u32,
}

impl ExportPeriod {
    /// Months before the year 2000 predate the practice software and are
    /// rejected as argument mistakes.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || year < 2000 {
            return Err(ExportError::InvalidPeriod { month, year });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for ExportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_month_and_year() {
        assert!(ExportPeriod::new(2025, 0).is_err());
        assert!(ExportPeriod::new(2025, 13).is_err());
        assert!(ExportPeriod::new(1999, 6).is_err());
        assert!(ExportPeriod::new(2000, 1).is_ok());
    }

    #[test]
    fn contains_only_dates_of_the_month() {
        let period = ExportPeriod::new(2025, 2).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
    }

    #[test]
    fn displays_as_month_slash_year() {
        assert_eq!(ExportPeriod::new(2025, 3).unwrap().to_string(), "03/2025");
    }
}
