use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Format a euro amount for console output: German grouping and decimal
/// mark, trailing currency symbol (ex. `1.234,56 €`).
pub(crate) fn format_eur(amount: Decimal) -> String {
    let decimal_places = Currency::EUR.exponent().unwrap_or(0) as usize;
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    let abs = amount.abs();
    let integer_part = abs
        .trunc()
        .to_i64()
        .unwrap_or_default()
        .to_formatted_string(&Locale::de);
    let fractional = format!("{:.decimal_places$}", abs.fract());
    let fractional_part = fractional.split('.').nth(1).unwrap_or_default();
    format!(
        "{}{},{} {}",
        sign,
        integer_part,
        fractional_part,
        Currency::EUR.symbol()
    )
}

/// Amount with comma decimal mark, two places, no grouping, as the postings
/// file and the cross-check report write it.
pub(crate) fn comma_amount(amount: Decimal) -> String {
    format!("{:.2}", amount).replace('.', ",")
}

/// `DDMM`, the posting date form of the Buchungsstapel format.
pub(crate) fn datev_short_date(date: NaiveDate) -> String {
    date.format("%d%m").to_string()
}

/// `DDMMYYYY`, the service date form of the Buchungsstapel format.
pub(crate) fn datev_long_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// `DD.MM.YYYY`, for the cross-check report and document info cells.
pub(crate) fn report_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_euro_amounts_in_german_convention() {
        assert_eq!(format_eur(dec!(1234.56)), "1.234,56 €");
        assert_eq!(format_eur(dec!(-7.5)), "-7,50 €");
        assert_eq!(format_eur(dec!(0)), "0,00 €");
    }

    #[test]
    fn formats_file_amounts_without_grouping() {
        assert_eq!(comma_amount(dec!(1234.5)), "1234,50");
        assert_eq!(comma_amount(dec!(50)), "50,00");
        assert_eq!(comma_amount(dec!(-20)), "-20,00");
    }

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
        assert_eq!(datev_short_date(date), "0304");
        assert_eq!(datev_long_date(date), "03042025");
        assert_eq!(report_date(date), "03.04.2025");
    }
}
