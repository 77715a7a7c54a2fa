use rust_decimal::Decimal;

use crate::entities::{Account, ItemDomain, TaxRate};

/// One slice of an invoice's outstanding debt: everything billed under one
/// (domain, tax rate) pair that has not been covered by a payment yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtBucket {
    pub domain: ItemDomain,
    pub rate: TaxRate,
    pub account: Account,
    pub amount: Decimal,
}

impl DebtBucket {
    pub fn new(domain: ItemDomain, rate: TaxRate, amount: Decimal) -> Self {
        Self {
            domain,
            rate,
            account: Account::revenue(domain, rate),
            amount,
        }
    }

    /// A fragment consuming `amount` of this bucket. Fragments are detached
    /// values; nothing of the bucket is aliased into them.
    pub fn fragment(&self, amount: Decimal) -> Fragment {
        Fragment {
            domain: self.domain,
            rate: self.rate,
            account: self.account,
            amount,
        }
    }
}

/// The part of one debt bucket consumed by a single payment. Each fragment
/// becomes exactly one posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub domain: ItemDomain,
    pub rate: TaxRate,
    pub account: Account,
    pub amount: Decimal,
}
