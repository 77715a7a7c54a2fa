use crate::{
    entities::{CrosscheckEntry, ExportRecords, PaymentMethod},
    presentation::utils::{comma_amount, report_date},
};

/// Prints the reconciliation report the practice matches against its bank
/// statements: card settlements first, then transfers, each by date.
pub(crate) struct CrosscheckPrinter;

impl CrosscheckPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, records: &ExportRecords) -> String {
        let mut output = String::new();
        output.push_str("Datum;Betrag;Zahlart;Rechnung;Name\n");
        self.print_group(&mut output, &records.crosscheck, PaymentMethod::Ec);
        self.print_group(&mut output, &records.crosscheck, PaymentMethod::Bill);
        output
    }

    fn print_group(
        &self,
        output: &mut String,
        entries: &[CrosscheckEntry],
        method: PaymentMethod,
    ) {
        let group = {
            let mut v: Vec<&CrosscheckEntry> =
                entries.iter().filter(|e| e.method == method).collect();
            v.sort_by_key(|e| e.date);
            v
        };
        for entry in group {
            output.push_str(&format!(
                "{};{};{};{};{}\n",
                report_date(entry.date),
                comma_amount(entry.amount),
                entry.method.label(),
                entry.invoice_number,
                entry.client_name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{ExportPeriod, RunSummary};

    fn entry(day: u32, method: PaymentMethod, number: &str, name: &str) -> CrosscheckEntry {
        CrosscheckEntry {
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            amount: dec!(50.00),
            method,
            invoice_number: number.to_string(),
            client_name: name.to_string(),
        }
    }

    fn records(crosscheck: Vec<CrosscheckEntry>) -> ExportRecords {
        ExportRecords {
            postings: vec![],
            crosscheck,
            warnings: vec![],
            summary: RunSummary {
                period: ExportPeriod::new(2025, 4).unwrap(),
                turnover: dec!(0),
                cash_on_hand: dec!(0),
            },
        }
    }

    #[test]
    fn groups_card_payments_before_transfers_each_by_date() {
        let output = CrosscheckPrinter::new().print_report(&records(vec![
            entry(20, PaymentMethod::Ec, "R-3", "Schulz"),
            entry(5, PaymentMethod::Bill, "R-1", "Meier"),
            entry(10, PaymentMethod::Ec, "R-2", "Huber"),
        ]));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Datum;Betrag;Zahlart;Rechnung;Name");
        assert_eq!(lines[1], "10.04.2025;50,00;EC-Karte;R-2;Huber");
        assert_eq!(lines[2], "20.04.2025;50,00;EC-Karte;R-3;Schulz");
        assert_eq!(lines[3], "05.04.2025;50,00;Überweisung;R-1;Meier");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn free_payments_leave_invoice_and_name_empty() {
        let output = CrosscheckPrinter::new()
            .print_report(&records(vec![entry(5, PaymentMethod::Ec, "", "")]));
        assert_eq!(output.lines().nth(1).unwrap(), "05.04.2025;50,00;EC-Karte;;");
    }
}
