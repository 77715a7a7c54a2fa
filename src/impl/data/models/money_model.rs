use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::ExportError;

/// Numeric cell as the backup writes it: dot decimal separator, no grouping.
#[derive(Debug)]
pub(crate) struct MoneyModel(pub Decimal);
impl FromStr for MoneyModel {
    type Err = ExportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ExportError::InvalidAmount(s.to_string()))?;
        Ok(MoneyModel(amount))
    }
}

impl Into<Decimal> for MoneyModel {
    fn into(self) -> Decimal {
        self.0
    }
}
