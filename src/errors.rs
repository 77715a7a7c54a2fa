use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::RowId;

/// Fatal conditions. Anything recoverable (reconciliation mismatch,
/// overpayment, payment against an unknown invoice) is reported as an
/// [`ExportWarning`](crate::entities::ExportWarning) instead.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid backup archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Table '{0}' not found in backup archive")]
    MissingTable(&'static str),

    #[error("Invalid CSV in table '{table}': {source}")]
    InvalidCsv {
        table: &'static str,
        source: csv::Error,
    },

    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Row without id in table '{table}'")]
    RowWithoutId { table: String },

    #[error("Duplicate id '{id}' in table '{table}'")]
    DuplicateRowId { table: String, id: RowId },

    #[error("No row '{id}' in table '{table}'")]
    MissingRow { table: String, id: RowId },

    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp: '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Unknown payment method: '{0}'")]
    UnknownPaymentMethod(String),

    #[error("Unknown tax id: '{0}'")]
    UnknownTaxId(RowId),

    #[error("Unsupported tax rate {rate}% for tax id '{tax_id}' (supported: 19, 7, 0)")]
    UnsupportedTaxRate { tax_id: RowId, rate: Decimal },

    #[error("Invalid export period: month {month}, year {year}")]
    InvalidPeriod { month: u32, year: i32 },
}

pub type Result<T> = std::result::Result<T, ExportError>;
