use rust_decimal::Decimal;

use crate::{
    domain::logic::money::round_cents,
    entities::{ExportWarning, Fragment, Invoice, RowId},
};

/// Apply one payment to an invoice's debt state.
///
/// The open balance drops by the cent-rounded amount first; driving it
/// negative raises an overpayment warning but the run continues. The bucket
/// queue is then consumed head-first: a payment smaller than the head
/// splits it (the head survives reduced), otherwise whole buckets are
/// dequeued until the amount is spent or no debt remains. Fragments of one
/// call sum exactly to the payment amount whenever it does not exceed the
/// queued debt.
///
/// The same routine replays historical payments before the target month;
/// the caller simply discards the fragments then.
pub(crate) fn apply_payment(
    invoice: &mut Invoice,
    payment_id: &RowId,
    amount: Decimal,
) -> (Vec<Fragment>, Option<ExportWarning>) {
    let amount = round_cents(amount);

    invoice.open = round_cents(invoice.open - amount);
    let warning = if invoice.open < Decimal::ZERO {
        Some(ExportWarning::Overpayment {
            invoice: invoice.id.clone(),
            number: invoice.number.clone(),
            payment: payment_id.clone(),
            excess: -invoice.open,
        })
    } else {
        None
    };

    let mut fragments = Vec::new();
    let mut remaining = amount;
    while remaining > Decimal::ZERO {
        let Some(mut bucket) = invoice.debt.pop_front() else {
            break;
        };
        if remaining < bucket.amount {
            fragments.push(bucket.fragment(remaining));
            bucket.amount = round_cents(bucket.amount - remaining);
            invoice.debt.push_front(bucket);
            remaining = Decimal::ZERO;
        } else {
            remaining = round_cents(remaining - bucket.amount);
            fragments.push(bucket.fragment(bucket.amount));
        }
    }

    (fragments, warning)
}
