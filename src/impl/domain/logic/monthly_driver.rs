use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::logic::{
        debt_decomposition::DebtDecomposition,
        money::round_cents,
        payment_allocator::apply_payment,
        posting_builder::{counter_posting, fragment_posting, free_posting},
        utils,
    },
    entities::{
        Backup, CrosscheckEntry, ExportPeriod, ExportRecords, ExportWarning, Invoice, Payment,
        PaymentMethod, Posting, RowId, RunSummary,
    },
    errors::Result,
};

/// Runs one month: rebuilds every complete invoice's debt state from the
/// payment history, then turns the target month's payments into postings.
pub(crate) struct MonthlyDriver {
    backup: Backup,
    period: ExportPeriod,
}

impl MonthlyDriver {
    pub(crate) fn new(backup: Backup, period: ExportPeriod) -> Self {
        Self { backup, period }
    }

    pub(crate) fn process(self) -> Result<ExportRecords> {
        let mut warnings = Vec::new();

        // Decompose every complete invoice into its debt buckets.
        let decomposition = DebtDecomposition::new(&self.backup.line_items, &self.backup.tax);
        let mut invoices: BTreeMap<RowId, Invoice> = BTreeMap::new();
        for record in self.backup.invoices.iter().filter(|r| r.complete) {
            let (invoice, warning) = decomposition.decompose(record)?;
            warnings.extend(warning);
            invoices.insert(invoice.id.clone(), invoice);
        }
        debug!(
            invoices = invoices.len(),
            line_items = self.backup.line_items.len(),
            "decomposed complete invoices"
        );

        // Replay pass: every payment before the target month, oldest first,
        // so each invoice's queue reflects history at month start. The
        // fragments are computed and thrown away.
        let month_start = utils::month_start(self.period.year(), self.period.month())?;
        let mut prior: Vec<&Payment> = self
            .backup
            .payments
            .iter()
            .filter(|p| !p.deleted && p.invoice_id.is_some() && p.date.date() < month_start)
            .collect();
        prior.sort_by_key(|p| p.date);
        let replayed = prior.len();
        for payment in prior {
            if let Some(invoice_id) = &payment.invoice_id {
                match invoices.get_mut(invoice_id) {
                    Some(invoice) => {
                        let (_, warning) = apply_payment(invoice, &payment.id, payment.amount);
                        warnings.extend(warning);
                    }
                    None => warnings.push(ExportWarning::MissingInvoice {
                        payment: payment.id.clone(),
                        invoice: invoice_id.clone(),
                    }),
                }
            }
        }
        debug!(payments = replayed, "replayed prior months");

        // Posting pass, in payment enumeration order.
        let mut postings: Vec<Posting> = Vec::new();
        let mut crosscheck: Vec<CrosscheckEntry> = Vec::new();
        let mut turnover = Decimal::ZERO;
        for payment in &self.backup.payments {
            if payment.deleted || !self.period.contains(payment.date.date()) {
                continue;
            }
            // The accountant's software rejects zero-amount rows.
            if round_cents(payment.amount).is_zero() {
                continue;
            }

            match &payment.invoice_id {
                Some(invoice_id) => {
                    let Some(invoice) = invoices.get_mut(invoice_id) else {
                        warnings.push(ExportWarning::MissingInvoice {
                            payment: payment.id.clone(),
                            invoice: invoice_id.clone(),
                        });
                        continue;
                    };
                    let (fragments, warning) = apply_payment(invoice, &payment.id, payment.amount);
                    warnings.extend(warning);
                    for fragment in &fragments {
                        postings.push(fragment_posting(payment, invoice, fragment));
                    }
                    turnover += round_cents(payment.amount);
                    self.note_crosscheck(&mut crosscheck, payment, Some(invoice));
                    if payment.method == PaymentMethod::Ec {
                        postings.push(counter_posting(payment, Some(invoice)));
                    }
                }
                None => {
                    postings.push(free_posting(payment));
                    self.note_crosscheck(&mut crosscheck, payment, None);
                    if payment.method == PaymentMethod::Ec {
                        postings.push(counter_posting(payment, None));
                    }
                }
            }
            debug!(
                payment = %payment.id,
                responsible = %payment.username,
                "processed payment"
            );
        }

        // Cash position through month end, across the whole history.
        let month_end = utils::month_end(self.period.year(), self.period.month())?;
        let cash_on_hand = self
            .backup
            .payments
            .iter()
            .filter(|p| {
                !p.deleted && p.method == PaymentMethod::Cash && p.date.date() <= month_end
            })
            .map(|p| round_cents(p.amount))
            .sum();

        debug!(postings = postings.len(), "posting pass finished");
        Ok(ExportRecords {
            postings,
            crosscheck,
            warnings,
            summary: RunSummary {
                period: self.period,
                turnover,
                cash_on_hand,
            },
        })
    }

    /// Card and transfer payments land in the cross-check report; cash
    /// needs no reconciliation against bank statements.
    fn note_crosscheck(
        &self,
        crosscheck: &mut Vec<CrosscheckEntry>,
        payment: &Payment,
        invoice: Option<&Invoice>,
    ) {
        if payment.method == PaymentMethod::Cash {
            return;
        }
        let client_name = invoice
            .map(|i| {
                self.backup
                    .clients
                    .get(&i.client_id, "last_name")
                    .unwrap_or("")
                    .to_string()
            })
            .unwrap_or_default();
        crosscheck.push(CrosscheckEntry {
            date: payment.date.date(),
            amount: round_cents(payment.amount),
            method: payment.method,
            invoice_number: invoice.map(|i| i.number.clone()).unwrap_or_default(),
            client_name,
        });
    }
}
