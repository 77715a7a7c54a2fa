use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{Account, RowId};

/// Debit/credit marker of a posting. A positive source amount books as a
/// debit on the destination account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    /// `S`/`H` marker expected by the bookkeeping software.
    pub fn datev_mark(&self) -> &'static str {
        match self {
            Side::Debit => "S",
            Side::Credit => "H",
        }
    }
}

/// One row of the output postings file: an unsigned movement between two
/// accounts plus the reference annotations the accountant asked for.
///
/// `dest_account` lands in the Konto column, `source_account` in Gegenkonto.
#[derive(Debug, Clone)]
pub struct Posting {
    pub amount: Decimal,
    pub side: Side,
    pub source_account: Account,
    pub dest_account: Account,
    pub tax_code: Option<&'static str>,
    pub booking_date: NaiveDate,
    pub description: String,
    pub service_date: NaiveDate,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub payment_id: RowId,
    pub item_kind: Option<String>,
    pub customer_id: Option<RowId>,
    pub remarks: Option<String>,
    /// Name of the person who took the payment; kept for the debug trail,
    /// not written into the postings file.
    pub responsible: String,
}
