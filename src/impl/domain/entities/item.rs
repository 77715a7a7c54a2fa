use rust_decimal::Decimal;

use crate::entities::RowId;

/// What kind of work or goods an invoice line bills. Medication rows come
/// from one physical table and split into two domains by the `applied` flag.
///
/// Variants are declared in the order the buckets of one tax rate keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemDomain {
    Products,
    Medication,
    MedicationApplied,
    Services,
}

impl ItemDomain {
    /// Label carried into the posting annotations.
    pub fn label(&self) -> &'static str {
        match self {
            ItemDomain::Products => "Produkte",
            ItemDomain::Medication => "Medikamente",
            ItemDomain::MedicationApplied => "Angewandte Medikamente",
            ItemDomain::Services => "Leistungen",
        }
    }
}

/// One detail row of an invoice, already typed and defaulted.
///
/// `amount`, `factor` and `count` default to 1 for tables that do not carry
/// the column; `price` is always present. The row's billed value is the
/// product of all four.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub invoice_id: RowId,
    pub domain: ItemDomain,
    pub amount: Decimal,
    pub factor: Decimal,
    pub count: Decimal,
    pub price: Decimal,
    pub tax_id: RowId,
}
