use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::{
    entities::RowId,
    errors::{ExportError, Result},
};

/// How a payment was made. The set is closed; a method string outside it is
/// rejected at load time because such a payment cannot be posted safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Ec,
    Bill,
}

impl PaymentMethod {
    /// Label used in the cross-check report.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Bar",
            PaymentMethod::Ec => "EC-Karte",
            PaymentMethod::Bill => "Überweisung",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "ec" => Ok(PaymentMethod::Ec),
            "bill" => Ok(PaymentMethod::Bill),
            other => Err(ExportError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// One payment row. Negative amounts are refunds; the sign decides the
/// debit/credit side of the resulting posting.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: RowId,
    /// Present for payments settling an invoice, absent for free-standing
    /// cash movements.
    pub invoice_id: Option<RowId>,
    pub date: NaiveDateTime,
    pub method: PaymentMethod,
    pub amount: Decimal,
    /// Free-text classification from the practice software, e.g.
    /// "Geld auf Bank gebracht".
    pub payment_type: String,
    pub notes: String,
    pub username: String,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("ec".parse::<PaymentMethod>().unwrap(), PaymentMethod::Ec);
        assert_eq!("bill".parse::<PaymentMethod>().unwrap(), PaymentMethod::Bill);
    }

    #[test]
    fn unknown_method_is_fatal() {
        assert!(matches!(
            "paypal".parse::<PaymentMethod>().unwrap_err(),
            ExportError::UnknownPaymentMethod(_)
        ));
    }
}
