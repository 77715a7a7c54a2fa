use crate::{
    entities::{ExportRecords, Posting},
    presentation::utils::{comma_amount, datev_long_date, datev_short_date, report_date},
};

/// Header of the Buchungsstapel format. Only a handful of columns are ever
/// populated; the rest stay empty but must be present for the import to be
/// accepted.
const COLUMNS: [&str; 116] = [
    "Umsatz (ohne Soll/Haben-Kz)",
    "Soll/Haben-Kennzeichen",
    "WKZ Umsatz",
    "Kurs",
    "Basis-Umsatz",
    "WKZ Basis-Umsatz",
    "Konto",
    "Gegenkonto (ohne BU-Schlüssel)",
    "BU-Schlüssel",
    "Belegdatum",
    "Belegfeld 1",
    "Belegfeld 2",
    "Skonto",
    "Buchungstext",
    "Postensperre",
    "Diverse Adressnummer",
    "Geschäftspartnerbank",
    "Sachverhalt",
    "Zinssperre",
    "Beleglink",
    "Beleginfo - Art 1",
    "Beleginfo - Inhalt 1",
    "Beleginfo - Art 2",
    "Beleginfo - Inhalt 2",
    "Beleginfo - Art 3",
    "Beleginfo - Inhalt 3",
    "Beleginfo - Art 4",
    "Beleginfo - Inhalt 4",
    "Beleginfo - Art 5",
    "Beleginfo - Inhalt 5",
    "Beleginfo - Art 6",
    "Beleginfo - Inhalt 6",
    "Beleginfo - Art 7",
    "Beleginfo - Inhalt 7",
    "Beleginfo - Art 8",
    "Beleginfo - Inhalt 8",
    "KOST1 - Kostenstelle",
    "KOST2 - Kostenstelle",
    "Kost-Menge",
    "EU-Land u. UStID",
    "EU-Steuersatz",
    "Abw. Versteuerungsart",
    "Sachverhalt L+L",
    "Funktionsergänzung L+L",
    "BU 49 Hauptfunktionstyp",
    "BU 49 Hauptfunktionsnummer",
    "BU 49 Funktionsergänzung",
    "Zusatzinformation - Art 1",
    "Zusatzinformation - Inhalt 1",
    "Zusatzinformation - Art 2",
    "Zusatzinformation - Inhalt 2",
    "Zusatzinformation - Art 3",
    "Zusatzinformation - Inhalt 3",
    "Zusatzinformation - Art 4",
    "Zusatzinformation - Inhalt 4",
    "Zusatzinformation - Art 5",
    "Zusatzinformation - Inhalt 5",
    "Zusatzinformation - Art 6",
    "Zusatzinformation - Inhalt 6",
    "Zusatzinformation - Art 7",
    "Zusatzinformation - Inhalt 7",
    "Zusatzinformation - Art 8",
    "Zusatzinformation - Inhalt 8",
    "Zusatzinformation - Art 9",
    "Zusatzinformation - Inhalt 9",
    "Zusatzinformation - Art 10",
    "Zusatzinformation - Inhalt 10",
    "Zusatzinformation - Art 11",
    "Zusatzinformation - Inhalt 11",
    "Zusatzinformation - Art 12",
    "Zusatzinformation - Inhalt 12",
    "Zusatzinformation - Art 13",
    "Zusatzinformation - Inhalt 13",
    "Zusatzinformation - Art 14",
    "Zusatzinformation - Inhalt 14",
    "Zusatzinformation - Art 15",
    "Zusatzinformation - Inhalt 15",
    "Zusatzinformation - Art 16",
    "Zusatzinformation - Inhalt 16",
    "Zusatzinformation - Art 17",
    "Zusatzinformation - Inhalt 17",
    "Zusatzinformation - Art 18",
    "Zusatzinformation - Inhalt 18",
    "Zusatzinformation - Art 19",
    "Zusatzinformation - Inhalt 19",
    "Zusatzinformation - Art 20",
    "Zusatzinformation - Inhalt 20",
    "Stück",
    "Gewicht",
    "Zahlweise",
    "Forderungsart",
    "Veranlagungsjahr",
    "Zugeordnete Fälligkeit",
    "Skontotyp",
    "Auftragsnummer",
    "Buchungstyp",
    "USt-Schlüssel (Anzahlungen)",
    "EU-Land (Anzahlungen)",
    "Sachverhalt L+L (Anzahlungen)",
    "EU-Steuersatz (Anzahlungen)",
    "Erlöskonto (Anzahlungen)",
    "Herkunft-Kz",
    "Buchungs GUID",
    "KOST-Datum",
    "SEPA-Mandatsreferenz",
    "Skontosperre",
    "Gesellschaftername",
    "Beteiligtennummer",
    "Identifikationsnummer",
    "Zeichnernummer",
    "Postensperre bis",
    "Bezeichnung SoBil-Sachverhalt",
    "Kennzeichen SoBil-Buchung",
    "Festschreibung",
    "Leistungsdatum",
    "Datum Zuord. Steuerperiode",
];

pub(crate) struct DatevPrinter;

impl DatevPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_postings(&self, records: &ExportRecords) -> String {
        let mut output = String::new();
        let header: Vec<String> = COLUMNS.iter().map(|c| quote(c)).collect();
        output.push_str(&header.join(";"));
        output.push('\n');
        for posting in &records.postings {
            output.push_str(&self.row_cells(posting).join(";"));
            output.push('\n');
        }
        output
    }

    /// One data row. Text cells are quoted; amount, account and date cells
    /// are written bare.
    fn row_cells(&self, posting: &Posting) -> Vec<String> {
        let mut cells = vec![String::new(); COLUMNS.len()];
        cells[0] = comma_amount(posting.amount);
        cells[1] = quote(posting.side.datev_mark());
        cells[2] = quote("EUR");
        cells[6] = posting.dest_account.to_string();
        cells[7] = posting.source_account.to_string();
        if let Some(code) = posting.tax_code {
            cells[8] = quote(code);
        }
        cells[9] = datev_short_date(posting.booking_date);
        cells[10] = quote(
            posting
                .invoice_number
                .as_deref()
                .unwrap_or(posting.payment_id.as_str()),
        );
        cells[13] = quote(&truncated(&posting.description));
        for (i, (kind, content)) in self.document_info(posting).iter().enumerate() {
            cells[20 + 2 * i] = quote(kind);
            cells[21 + 2 * i] = quote(content);
        }
        cells[114] = datev_long_date(posting.service_date);
        cells
    }

    /// Document info pairs, packed into the slots from the first one upward.
    /// Empty values are left out entirely instead of occupying a slot.
    fn document_info(&self, posting: &Posting) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        let mut push = |kind: &'static str, content: String| {
            if !content.is_empty() {
                pairs.push((kind, content));
            }
        };
        if let Some(number) = &posting.invoice_number {
            push("Rechnungsnummer", number.clone());
        }
        if let Some(date) = posting.invoice_date {
            push("Rechnungsdatum", report_date(date));
        }
        push("Zahlung", posting.payment_id.to_string());
        if let Some(kind) = &posting.item_kind {
            push("Art", kind.clone());
        }
        if let Some(customer) = &posting.customer_id {
            push("Kundennummer", customer.to_string());
        }
        if let Some(remarks) = &posting.remarks {
            push("Bemerkung", remarks.clone());
        }
        pairs
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// The accountant's software caps the posting text at 60 characters.
fn truncated(description: &str) -> String {
    description.chars().take(60).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{Account, RowId, Side};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice_posting() -> Posting {
        Posting {
            amount: dec!(50.00),
            side: Side::Debit,
            source_account: Account(8410),
            dest_account: Account::MAIN,
            tax_code: Some("3"),
            booking_date: date(2025, 4, 15),
            description: "Rechnung R-100".to_string(),
            service_date: date(2025, 3, 2),
            invoice_number: Some("R-100".to_string()),
            invoice_date: Some(date(2025, 3, 2)),
            payment_id: RowId::new("42"),
            item_kind: Some("Produkte".to_string()),
            customer_id: Some(RowId::new("7")),
            remarks: None,
            responsible: "anna".to_string(),
        }
    }

    fn free_payment_posting() -> Posting {
        Posting {
            amount: dec!(20.00),
            side: Side::Credit,
            source_account: Account::NULL,
            dest_account: Account::MAIN,
            tax_code: None,
            booking_date: date(2025, 4, 16),
            description: "Briefmarken".to_string(),
            service_date: date(2025, 4, 16),
            invoice_number: None,
            invoice_date: None,
            payment_id: RowId::new("43"),
            item_kind: Some("Barausgabe".to_string()),
            customer_id: None,
            remarks: Some("Porto".to_string()),
            responsible: "bert".to_string(),
        }
    }

    fn records(postings: Vec<Posting>) -> ExportRecords {
        ExportRecords {
            postings,
            crosscheck: vec![],
            warnings: vec![],
            summary: crate::entities::RunSummary {
                period: crate::entities::ExportPeriod::new(2025, 4).unwrap(),
                turnover: dec!(0),
                cash_on_hand: dec!(0),
            },
        }
    }

    #[test]
    fn header_row_has_all_columns_quoted() {
        let output = DatevPrinter::new().print_postings(&records(vec![]));
        let header = output.lines().next().unwrap();
        let cells: Vec<&str> = header.split(';').collect();
        assert_eq!(cells.len(), 116);
        assert_eq!(cells[0], "\"Umsatz (ohne Soll/Haben-Kz)\"");
        assert_eq!(cells[115], "\"Datum Zuord. Steuerperiode\"");
        assert!(cells.iter().all(|c| c.starts_with('"') && c.ends_with('"')));
    }

    #[test]
    fn invoice_rows_fill_the_posting_columns() {
        let output = DatevPrinter::new().print_postings(&records(vec![invoice_posting()]));
        let row = output.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(';').collect();
        assert_eq!(cells.len(), 116);
        assert_eq!(cells[0], "50,00");
        assert_eq!(cells[1], "\"S\"");
        assert_eq!(cells[2], "\"EUR\"");
        assert_eq!(cells[6], "1001");
        assert_eq!(cells[7], "8410");
        assert_eq!(cells[8], "\"3\"");
        assert_eq!(cells[9], "1504");
        assert_eq!(cells[10], "\"R-100\"");
        assert_eq!(cells[13], "\"Rechnung R-100\"");
        assert_eq!(cells[114], "02032025");
    }

    #[test]
    fn document_info_pairs_pack_from_the_first_slot() {
        let output = DatevPrinter::new().print_postings(&records(vec![invoice_posting()]));
        let row = output.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(';').collect();
        assert_eq!(cells[20], "\"Rechnungsnummer\"");
        assert_eq!(cells[21], "\"R-100\"");
        assert_eq!(cells[22], "\"Rechnungsdatum\"");
        assert_eq!(cells[23], "\"02.03.2025\"");
        assert_eq!(cells[24], "\"Zahlung\"");
        assert_eq!(cells[25], "\"42\"");
        assert_eq!(cells[26], "\"Art\"");
        assert_eq!(cells[27], "\"Produkte\"");
        assert_eq!(cells[28], "\"Kundennummer\"");
        assert_eq!(cells[29], "\"7\"");
        assert_eq!(cells[30], "");
        assert_eq!(cells[31], "");
    }

    #[test]
    fn free_payment_rows_reference_the_payment_id() {
        let output = DatevPrinter::new().print_postings(&records(vec![free_payment_posting()]));
        let row = output.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(';').collect();
        assert_eq!(cells[0], "20,00");
        assert_eq!(cells[1], "\"H\"");
        assert_eq!(cells[6], "1001");
        assert_eq!(cells[7], "0");
        assert_eq!(cells[8], "");
        assert_eq!(cells[10], "\"43\"");
        // First pair is the payment reference; nothing invoice-shaped exists.
        assert_eq!(cells[20], "\"Zahlung\"");
        assert_eq!(cells[21], "\"43\"");
        assert_eq!(cells[22], "\"Art\"");
        assert_eq!(cells[23], "\"Barausgabe\"");
        assert_eq!(cells[24], "\"Bemerkung\"");
        assert_eq!(cells[25], "\"Porto\"");
    }

    #[test]
    fn long_posting_texts_are_truncated() {
        let mut posting = invoice_posting();
        posting.description = "x".repeat(70);
        let output = DatevPrinter::new().print_postings(&records(vec![posting]));
        let row = output.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(';').collect();
        assert_eq!(cells[13].len(), 62);
        assert_eq!(cells[13], format!("\"{}\"", "x".repeat(60)));
    }

    #[test]
    fn quotes_inside_text_cells_are_doubled() {
        let mut posting = free_payment_posting();
        posting.description = "Ein \"Zitat\"".to_string();
        let output = DatevPrinter::new().print_postings(&records(vec![posting]));
        assert!(output.contains("\"Ein \"\"Zitat\"\"\""));
    }
}
