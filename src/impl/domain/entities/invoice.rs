use std::collections::VecDeque;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{DebtBucket, RowId};

/// An invoice row as loaded from the backup.
///
/// `total` is the gross amount as recorded by the practice software; the
/// line items it is reconciled against carry gross values as well. A backup
/// violating that assumption surfaces as a reconciliation warning rather
/// than being silently corrected.
#[derive(Debug, Clone)]
pub struct InvoiceRecord {
    pub id: RowId,
    pub client_id: RowId,
    pub number: String,
    pub date: Option<NaiveDate>,
    pub total: Decimal,
    /// Only invoices with source status `complete` take part in the run.
    pub complete: bool,
}

/// Runtime debt state of one complete invoice, rebuilt from the source
/// tables every run and mutated only through payment allocation.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: RowId,
    pub client_id: RowId,
    pub number: String,
    pub date: Option<NaiveDate>,
    /// Recorded total minus every payment applied so far. Goes negative on
    /// overpayment, which is reported but does not stop the run.
    pub open: Decimal,
    /// Outstanding buckets, cheapest tax rate first. Head is consumed first.
    pub debt: VecDeque<DebtBucket>,
}
