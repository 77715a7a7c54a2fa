use crate::entities::{ItemDomain, TaxRate};

/// A ledger account number in the receiving bookkeeping software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Account(pub u32);

impl Account {
    /// Zero account, used as the counter side of plain cash movements.
    pub const NULL: Account = Account(0);
    /// Main cash box account.
    pub const MAIN: Account = Account(1001);
    /// Bank account, target of cash-to-bank deposits.
    pub const BANK: Account = Account(1360);
    /// Clearing account through which EC card payments settle.
    pub const EC_CLEARING: Account = Account(1361);
    /// Clearing account for invoices paid by bank transfer.
    pub const TRANSFER_CLEARING: Account = Account(1362);

    /// Revenue account for one debt bucket. The mapping is fixed
    /// configuration of the practice, not derived from the backup.
    pub fn revenue(domain: ItemDomain, rate: TaxRate) -> Account {
        match (domain, rate) {
            (ItemDomain::Products, TaxRate::Standard) => Account(8410),
            (ItemDomain::Products, TaxRate::Reduced) => Account(8310),
            (ItemDomain::Products, TaxRate::Zero) => Account(8110),
            (ItemDomain::Medication, TaxRate::Standard) => Account(8420),
            (ItemDomain::Medication, TaxRate::Reduced) => Account(8320),
            (ItemDomain::Medication, TaxRate::Zero) => Account(8120),
            (ItemDomain::MedicationApplied, TaxRate::Standard) => Account(8430),
            (ItemDomain::MedicationApplied, TaxRate::Reduced) => Account(8330),
            (ItemDomain::MedicationApplied, TaxRate::Zero) => Account(8130),
            (ItemDomain::Services, TaxRate::Standard) => Account(8440),
            (ItemDomain::Services, TaxRate::Reduced) => Account(8340),
            (ItemDomain::Services, TaxRate::Zero) => Account(8140),
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_accounts_are_distinct_per_domain_and_rate() {
        let mut seen = std::collections::HashSet::new();
        for domain in [
            ItemDomain::Products,
            ItemDomain::Medication,
            ItemDomain::MedicationApplied,
            ItemDomain::Services,
        ] {
            for rate in [TaxRate::Zero, TaxRate::Reduced, TaxRate::Standard] {
                assert!(seen.insert(Account::revenue(domain, rate)));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn fixed_accounts() {
        assert_eq!(Account::MAIN.to_string(), "1001");
        assert_eq!(Account::NULL.to_string(), "0");
    }
}
