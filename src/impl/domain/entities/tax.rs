use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    entities::RowId,
    errors::{ExportError, Result},
};

/// The three VAT rates the account mapping knows. Variants are declared in
/// ascending order so the derived `Ord` matches the bucket consumption order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxRate {
    Zero,
    Reduced,
    Standard,
}

impl TaxRate {
    pub fn percent(&self) -> Decimal {
        match self {
            TaxRate::Zero => Decimal::ZERO,
            TaxRate::Reduced => Decimal::from(7u32),
            TaxRate::Standard => Decimal::from(19u32),
        }
    }

    /// Posting key (BU-Schlüssel) of the receiving bookkeeping software.
    /// Untaxed postings carry no key.
    pub fn datev_code(&self) -> Option<&'static str> {
        match self {
            TaxRate::Zero => None,
            TaxRate::Reduced => Some("2"),
            TaxRate::Standard => Some("3"),
        }
    }

    fn from_percent(rate: Decimal) -> Option<TaxRate> {
        if rate == Decimal::ZERO {
            Some(TaxRate::Zero)
        } else if rate == Decimal::from(7u32) {
            Some(TaxRate::Reduced)
        } else if rate == Decimal::from(19u32) {
            Some(TaxRate::Standard)
        } else {
            None
        }
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Tax id to rate mapping from the backup's `tax` table.
///
/// The table may well carry rates the export cannot map (the 2020 16% rate,
/// for instance); those only become an error once a line item resolves to
/// one of them.
#[derive(Debug, Clone)]
pub struct TaxTable {
    rates: BTreeMap<RowId, Decimal>,
}

impl TaxTable {
    pub fn new(rates: BTreeMap<RowId, Decimal>) -> Self {
        Self { rates }
    }

    pub fn resolve(&self, tax_id: &RowId) -> Result<TaxRate> {
        let rate = self
            .rates
            .get(tax_id)
            .ok_or_else(|| ExportError::UnknownTaxId(tax_id.clone()))?;
        TaxRate::from_percent(*rate).ok_or_else(|| ExportError::UnsupportedTaxRate {
            tax_id: tax_id.clone(),
            rate: *rate,
        })
    }
}
