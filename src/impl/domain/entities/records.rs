use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{
    ExportPeriod, ExportWarning, InvoiceRecord, LineItem, Payment, PaymentMethod, Posting, Table,
    TaxTable,
};

// Before processing.
// ---

/// Everything loaded from the backup archive. Invoices, line items,
/// payments and the tax table arrive typed; the clients table stays raw
/// because only single cells of it are ever looked up.
#[derive(Debug)]
pub struct Backup {
    pub invoices: Vec<InvoiceRecord>,
    pub line_items: Vec<LineItem>,
    /// In enumeration order (ascending payment id), which is also the
    /// output order of the postings file.
    pub payments: Vec<Payment>,
    pub tax: TaxTable,
    pub clients: Table,
}

// After processing.
// ---

/// Result of one monthly run.
pub struct ExportRecords {
    /// In payment enumeration order; counter-postings directly follow the
    /// payment they belong to.
    pub postings: Vec<Posting>,
    pub crosscheck: Vec<CrosscheckEntry>,
    pub warnings: Vec<ExportWarning>,
    pub summary: RunSummary,
}

/// One line of the cross-check report: a card or transfer payment of the
/// target month, to be ticked off against the bank statement.
#[derive(Debug, Clone)]
pub struct CrosscheckEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub invoice_number: String,
    pub client_name: String,
}

/// Per-run accumulators, returned instead of kept in any global state.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub period: ExportPeriod,
    /// Sum of invoice-linked payment amounts inside the target month.
    pub turnover: Decimal,
    /// Signed sum of all cash-method payments up to the end of the target
    /// month; withdrawals and bank deposits are negative rows.
    pub cash_on_hand: Decimal,
}
