use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::ExportError;

/// Date cell in the backup's `YYYY-MM-DD` form (invoice dates).
#[derive(Debug)]
pub(crate) struct DateModel(pub NaiveDate);
impl FromStr for DateModel {
    type Err = ExportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| ExportError::InvalidDate(s.to_string()))?;
        Ok(DateModel(date))
    }
}

impl Into<NaiveDate> for DateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
