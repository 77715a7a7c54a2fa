use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::errors::ExportError;

/// Timestamp cell in the backup's `YYYY-MM-DD HH:MM:SS` form (payment dates).
#[derive(Debug)]
pub(crate) struct DateTimeModel(pub NaiveDateTime);
impl FromStr for DateTimeModel {
    type Err = ExportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
            .map_err(|_| ExportError::InvalidTimestamp(s.to_string()))?;
        Ok(DateTimeModel(date))
    }
}

impl Into<NaiveDateTime> for DateTimeModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}
