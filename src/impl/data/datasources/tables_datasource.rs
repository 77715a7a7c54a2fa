use crate::{
    entities::Table,
    errors::{ExportError, Result},
};

/// Parses one CSV table of the backup into an id-indexed [`Table`].
pub(crate) trait TablesDatasource {
    fn from_string(&self, name: &'static str, s: &str) -> Result<Table>;
}

pub(crate) struct TablesDatasourceImpl;

impl TablesDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TablesDatasource for TablesDatasourceImpl {
    fn from_string(&self, name: &'static str, s: &str) -> Result<Table> {
        let mut reader = csv::Reader::from_reader(s.as_bytes());
        let columns = reader
            .headers()
            .map_err(|e| ExportError::InvalidCsv {
                table: name,
                source: e,
            })?
            .iter()
            .map(str::to_string)
            .collect();
        let mut table = Table::new(name, columns)?;
        for record in reader.records() {
            let record = record.map_err(|e| ExportError::InvalidCsv {
                table: name,
                source: e,
            })?;
            // The dump writes `NULL` for unset cells.
            let cells = record
                .iter()
                .map(|cell| {
                    if cell == "NULL" {
                        String::new()
                    } else {
                        cell.to_string()
                    }
                })
                .collect();
            table.insert(cells)?;
        }
        Ok(table)
    }
}
