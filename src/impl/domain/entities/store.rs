use std::collections::BTreeMap;

use crate::errors::{ExportError, Result};

/// Opaque row identifier. Source ids are usually numeric but nothing here
/// depends on that; enumeration order is the string order of the id cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One source table, immutable after load: a header plus rows indexed by id.
///
/// Every row must carry a populated `id` cell, and ids must be unique; both
/// are enforced on insert so later lookups cannot trip over half-loaded rows.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: BTreeMap<RowId, Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let name = name.into();
        if !columns.iter().any(|c| c == "id") {
            return Err(ExportError::MissingColumn {
                table: name,
                column: "id".to_string(),
            });
        }
        Ok(Self {
            name,
            columns,
            rows: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ExportError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Insert one row, taking its id from the `id` column.
    pub fn insert(&mut self, cells: Vec<String>) -> Result<()> {
        let id_index = self.column_index("id")?;
        let id = match cells.get(id_index) {
            Some(cell) if !cell.is_empty() => RowId::new(cell.clone()),
            _ => {
                return Err(ExportError::RowWithoutId {
                    table: self.name.clone(),
                })
            }
        };
        if self.rows.contains_key(&id) {
            return Err(ExportError::DuplicateRowId {
                table: self.name.clone(),
                id,
            });
        }
        self.rows.insert(id, cells);
        Ok(())
    }

    /// Row ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &RowId> + '_ {
        self.rows.keys()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &RowId, column: &str) -> Result<&str> {
        let index = self.column_index(column)?;
        let row = self.rows.get(id).ok_or_else(|| ExportError::MissingRow {
            table: self.name.clone(),
            id: id.clone(),
        })?;
        Ok(row.get(index).map(String::as_str).unwrap_or(""))
    }
}
