use rust_decimal::Decimal;

use crate::entities::RowId;

/// A recoverable finding the accountant should see. Warnings never abort a
/// run; the affected invoice or payment is still processed (or skipped)
/// exactly as described per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportWarning {
    /// The decomposed buckets do not sum to the recorded invoice total.
    /// The invoice is processed with the computed buckets regardless.
    Reconciliation {
        invoice: RowId,
        number: String,
        total: Decimal,
        decomposed: Decimal,
    },
    /// A payment drove the invoice's open balance below zero.
    Overpayment {
        invoice: RowId,
        number: String,
        payment: RowId,
        excess: Decimal,
    },
    /// A payment references an invoice that is absent or not complete.
    /// The payment is skipped.
    MissingInvoice { payment: RowId, invoice: RowId },
}

impl std::fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportWarning::Reconciliation {
                invoice,
                number,
                total,
                decomposed,
            } => write!(
                f,
                "Invoice {} ({}): line items sum to {} but the recorded total is {}",
                invoice, number, decomposed, total
            ),
            ExportWarning::Overpayment {
                invoice,
                number,
                payment,
                excess,
            } => write!(
                f,
                "Invoice {} ({}): payment {} overpays the open balance by {}",
                invoice, number, payment, excess
            ),
            ExportWarning::MissingInvoice { payment, invoice } => write!(
                f,
                "Payment {}: invoice {} is absent or not complete, payment skipped",
                payment, invoice
            ),
        }
    }
}
