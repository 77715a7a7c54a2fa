use std::{fs::File, io::Read, path::Path};

use crate::errors::{ExportError, Result};

/// Pulls the named CSV tables out of the backup zip.
///
/// Dumps nest their tables under a top-level directory whose name varies per
/// export, so members are matched by file name at any depth. A lookalike such
/// as `old_invoices.csv` is not a match.
pub(crate) trait ArchiveDatasource {
    fn tables(
        &self,
        archive: &Path,
        names: &[&'static str],
    ) -> Result<Vec<(&'static str, String)>>;
}

pub(crate) struct ZipArchiveDatasourceImpl;

impl ZipArchiveDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ArchiveDatasource for ZipArchiveDatasourceImpl {
    fn tables(
        &self,
        archive: &Path,
        names: &[&'static str],
    ) -> Result<Vec<(&'static str, String)>> {
        let file = File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)?;
        let mut tables = Vec::with_capacity(names.len());
        for &name in names {
            let member = find_member(&zip, name).ok_or(ExportError::MissingTable(name))?;
            let mut content = String::new();
            zip.by_name(&member)?.read_to_string(&mut content)?;
            tables.push((name, content));
        }
        Ok(tables)
    }
}

fn find_member<R: Read + std::io::Seek>(zip: &zip::ZipArchive<R>, table: &str) -> Option<String> {
    let file_name = format!("{table}.csv");
    let nested = format!("/{file_name}");
    zip.file_names()
        .find(|m| *m == file_name || m.ends_with(&nested))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn archive_with(members: &[(&str, &str)]) -> tempfile::NamedTempFile {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, content) in members {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        let buffer = writer.finish().unwrap().into_inner();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), buffer).unwrap();
        file
    }

    #[test]
    fn finds_tables_nested_in_a_dump_directory() {
        let file = archive_with(&[
            ("backup-2025-04/invoices.csv", "id\n1\n"),
            ("tax.csv", "id,rate\n1,19\n"),
        ]);
        let tables = ZipArchiveDatasourceImpl::new()
            .tables(file.path(), &["invoices", "tax"])
            .unwrap();
        assert_eq!(tables[0], ("invoices", "id\n1\n".to_string()));
        assert_eq!(tables[1].0, "tax");
    }

    #[test]
    fn lookalike_members_do_not_match() {
        let file = archive_with(&[("old_invoices.csv", "id\n1\n")]);
        let err = ZipArchiveDatasourceImpl::new()
            .tables(file.path(), &["invoices"])
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingTable("invoices")));
    }

    #[test]
    fn missing_tables_are_reported_by_name() {
        let file = archive_with(&[("payments.csv", "id\n1\n")]);
        let err = ZipArchiveDatasourceImpl::new()
            .tables(file.path(), &["payments", "clients"])
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingTable("clients")));
    }
}
