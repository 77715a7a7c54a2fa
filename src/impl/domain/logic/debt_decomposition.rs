use std::collections::BTreeMap;
use std::collections::VecDeque;

use rust_decimal::Decimal;

use crate::{
    domain::logic::money::round_cents,
    entities::{DebtBucket, ExportWarning, Invoice, InvoiceRecord, ItemDomain, LineItem, TaxRate, TaxTable},
    errors::Result,
};

/// Builds the ordered debt-bucket queue of one invoice from its line items.
pub(crate) struct DebtDecomposition<'a> {
    items: &'a [LineItem],
    tax: &'a TaxTable,
}

impl<'a> DebtDecomposition<'a> {
    pub(crate) fn new(items: &'a [LineItem], tax: &'a TaxTable) -> Self {
        Self { items, tax }
    }

    /// Decompose one invoice into buckets and reconcile them against the
    /// recorded total. A mismatch yields a warning, not an error; the
    /// invoice keeps whatever buckets were computed. Unknown or unmappable
    /// tax rates abort, because the affected rows could not be posted.
    pub(crate) fn decompose(
        &self,
        record: &InvoiceRecord,
    ) -> Result<(Invoice, Option<ExportWarning>)> {
        // Keyed by (rate, domain): ascending tax rate first, domain
        // declaration order within one rate.
        let mut totals: BTreeMap<(TaxRate, ItemDomain), Decimal> = BTreeMap::new();
        for item in self.items.iter().filter(|i| i.invoice_id == record.id) {
            let rate = self.tax.resolve(&item.tax_id)?;
            let value = round_cents(item.amount * item.factor * item.count * item.price);
            *totals.entry((rate, item.domain)).or_insert(Decimal::ZERO) += value;
        }

        let debt: VecDeque<DebtBucket> = totals
            .into_iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|((rate, domain), amount)| DebtBucket::new(domain, rate, amount))
            .collect();

        let decomposed: Decimal = debt.iter().map(|b| b.amount).sum();
        let total = round_cents(record.total);
        let warning = if round_cents(decomposed) != total {
            Some(ExportWarning::Reconciliation {
                invoice: record.id.clone(),
                number: record.number.clone(),
                total,
                decomposed: round_cents(decomposed),
            })
        } else {
            None
        };

        let invoice = Invoice {
            id: record.id.clone(),
            client_id: record.client_id.clone(),
            number: record.number.clone(),
            date: record.date,
            open: total,
            debt,
        };
        Ok((invoice, warning))
    }
}
