use rust_decimal::Decimal;

use crate::{
    domain::logic::money::round_cents,
    entities::{Account, Fragment, Invoice, Payment, PaymentMethod, Posting, RowId, Side},
};

const BANK_DEPOSIT_PREFIX: &str = "geld auf bank";

fn signed(amount: Decimal) -> (Decimal, Side) {
    if amount < Decimal::ZERO {
        (-amount, Side::Credit)
    } else {
        (amount, Side::Debit)
    }
}

fn customer(invoice: &Invoice) -> Option<RowId> {
    if invoice.client_id.is_empty() {
        None
    } else {
        Some(invoice.client_id.clone())
    }
}

/// Posting for one consumed debt fragment of an invoice-linked payment.
///
/// Transfers settle through the clearing account; cash and card payments
/// book straight against the cash box. The service date is the invoice
/// date when the backup has one.
pub(crate) fn fragment_posting(payment: &Payment, invoice: &Invoice, fragment: &Fragment) -> Posting {
    let (amount, side) = signed(fragment.amount);
    let booking_date = payment.date.date();
    let dest_account = match payment.method {
        PaymentMethod::Bill => Account::TRANSFER_CLEARING,
        PaymentMethod::Cash | PaymentMethod::Ec => Account::MAIN,
    };
    Posting {
        amount,
        side,
        source_account: fragment.account,
        dest_account,
        tax_code: fragment.rate.datev_code(),
        booking_date,
        description: format!("Rechnung {}", invoice.number),
        service_date: invoice.date.unwrap_or(booking_date),
        invoice_number: Some(invoice.number.clone()),
        invoice_date: invoice.date,
        payment_id: payment.id.clone(),
        item_kind: Some(fragment.domain.label().to_string()),
        customer_id: customer(invoice),
        remarks: None,
        responsible: payment.username.clone(),
    }
}

/// Posting for a payment without an invoice: either cash brought to the
/// bank (classification text starts with "geld auf bank") or a plain cash
/// movement against the zero account.
pub(crate) fn free_posting(payment: &Payment) -> Posting {
    let (amount, side) = signed(round_cents(payment.amount));
    let booking_date = payment.date.date();
    let deposit = payment
        .payment_type
        .to_lowercase()
        .starts_with(BANK_DEPOSIT_PREFIX);
    let (source_account, label, remarks) = if deposit {
        (Account::BANK, "Einzahlung", None)
    } else {
        (
            Account::NULL,
            "Barausgabe",
            Some(payment.payment_type.clone()),
        )
    };
    Posting {
        amount,
        side,
        source_account,
        dest_account: Account::MAIN,
        tax_code: None,
        booking_date,
        description: payment.notes.clone(),
        service_date: booking_date,
        invoice_number: None,
        invoice_date: None,
        payment_id: payment.id.clone(),
        item_kind: Some(label.to_string()),
        customer_id: None,
        remarks,
        responsible: payment.username.clone(),
    }
}

/// The offsetting entry for an EC card payment: the negated amount moved
/// from the EC clearing account to the cash box, so the card settlement can
/// be matched when the bank forwards it.
pub(crate) fn counter_posting(payment: &Payment, invoice: Option<&Invoice>) -> Posting {
    let (amount, side) = signed(-round_cents(payment.amount));
    let booking_date = payment.date.date();
    let description = match invoice {
        Some(invoice) => format!("Übertrag Rechnung {}", invoice.number),
        None if payment.notes.is_empty() => "Übertrag ohne Rechnung".to_string(),
        None => format!("Übertrag ohne Rechnung: {}", payment.notes),
    };
    Posting {
        amount,
        side,
        source_account: Account::EC_CLEARING,
        dest_account: Account::MAIN,
        tax_code: None,
        booking_date,
        description,
        service_date: booking_date,
        invoice_number: invoice.map(|i| i.number.clone()),
        invoice_date: invoice.and_then(|i| i.date),
        payment_id: payment.id.clone(),
        item_kind: Some("Umbuchung".to_string()),
        customer_id: invoice.and_then(customer),
        remarks: Some("Übertrag EC-Karten-Zahlung".to_string()),
        responsible: payment.username.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{DebtBucket, ItemDomain, TaxRate};

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn payment(method: PaymentMethod, amount: Decimal) -> Payment {
        Payment {
            id: RowId::new("42"),
            invoice_id: Some(RowId::new("1")),
            date: datetime("2025-04-15 10:30:00"),
            method,
            amount,
            payment_type: String::new(),
            notes: "Notiz".to_string(),
            username: "anna".to_string(),
            deleted: false,
        }
    }

    fn invoice() -> Invoice {
        Invoice {
            id: RowId::new("1"),
            client_id: RowId::new("7"),
            number: "R-100".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2),
            open: dec!(0),
            debt: VecDeque::new(),
        }
    }

    fn fragment() -> Fragment {
        DebtBucket::new(ItemDomain::Products, TaxRate::Standard, dec!(50)).fragment(dec!(50))
    }

    #[test]
    fn fragment_posting_books_revenue_against_the_cash_box() {
        let p = fragment_posting(&payment(PaymentMethod::Ec, dec!(50)), &invoice(), &fragment());
        assert_eq!(p.amount, dec!(50));
        assert_eq!(p.side, Side::Debit);
        assert_eq!(p.source_account, Account::revenue(ItemDomain::Products, TaxRate::Standard));
        assert_eq!(p.dest_account, Account::MAIN);
        assert_eq!(p.tax_code, Some("3"));
        assert_eq!(p.description, "Rechnung R-100");
        assert_eq!(p.invoice_number.as_deref(), Some("R-100"));
        assert_eq!(p.item_kind.as_deref(), Some("Produkte"));
        assert_eq!(p.customer_id, Some(RowId::new("7")));
        assert_eq!(p.booking_date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
        assert_eq!(p.service_date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    }

    #[test]
    fn bill_payments_settle_through_the_transfer_account() {
        let p = fragment_posting(&payment(PaymentMethod::Bill, dec!(50)), &invoice(), &fragment());
        assert_eq!(p.dest_account, Account::TRANSFER_CLEARING);
    }

    #[test]
    fn undated_invoice_falls_back_to_the_payment_date() {
        let mut inv = invoice();
        inv.date = None;
        let p = fragment_posting(&payment(PaymentMethod::Cash, dec!(50)), &inv, &fragment());
        assert_eq!(p.service_date, p.booking_date);
        assert!(p.invoice_date.is_none());
    }

    #[test]
    fn bank_deposit_is_recognized_case_insensitively() {
        let mut pay = payment(PaymentMethod::Cash, dec!(200));
        pay.invoice_id = None;
        pay.payment_type = "Geld auf Bank gebracht".to_string();
        let p = free_posting(&pay);
        assert_eq!(p.source_account, Account::BANK);
        assert_eq!(p.item_kind.as_deref(), Some("Einzahlung"));
        assert!(p.remarks.is_none());
        assert_eq!(p.description, "Notiz");
    }

    #[test]
    fn other_free_payments_are_cash_movements() {
        let mut pay = payment(PaymentMethod::Cash, dec!(-20));
        pay.invoice_id = None;
        pay.payment_type = "Porto".to_string();
        let p = free_posting(&pay);
        assert_eq!(p.source_account, Account::NULL);
        assert_eq!(p.dest_account, Account::MAIN);
        assert_eq!(p.amount, dec!(20));
        assert_eq!(p.side, Side::Credit);
        assert_eq!(p.item_kind.as_deref(), Some("Barausgabe"));
        assert_eq!(p.remarks.as_deref(), Some("Porto"));
    }

    #[test]
    fn counter_posting_negates_and_uses_the_clearing_pair() {
        let inv = invoice();
        let p = counter_posting(&payment(PaymentMethod::Ec, dec!(50)), Some(&inv));
        assert_eq!(p.amount, dec!(50));
        assert_eq!(p.side, Side::Credit);
        assert_eq!(p.source_account, Account::EC_CLEARING);
        assert_eq!(p.dest_account, Account::MAIN);
        assert_eq!(p.description, "Übertrag Rechnung R-100");
        assert_eq!(p.item_kind.as_deref(), Some("Umbuchung"));
        assert_eq!(p.remarks.as_deref(), Some("Übertrag EC-Karten-Zahlung"));
        assert_eq!(p.invoice_number.as_deref(), Some("R-100"));
    }

    #[test]
    fn counter_posting_without_invoice_carries_the_notes() {
        let p = counter_posting(&payment(PaymentMethod::Ec, dec!(50)), None);
        assert_eq!(p.description, "Übertrag ohne Rechnung: Notiz");
        assert!(p.invoice_number.is_none());
        assert!(p.customer_id.is_none());
    }
}
