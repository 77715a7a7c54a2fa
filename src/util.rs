use crate::{
    domain::usecases::export_usecase::{ExportUsecase as _, ExportUsecaseImpl},
    entities::{ExportPeriod, ExportRecords},
    errors::Result,
    presentation::{crosscheck_printer::CrosscheckPrinter, datev_printer::DatevPrinter},
};

pub type DatevFile = String;
pub type CrosscheckFile = String;

pub struct DatevExportUtil {
    export_usecase: ExportUsecaseImpl,
    datev_printer: DatevPrinter,
    crosscheck_printer: CrosscheckPrinter,
}

impl DatevExportUtil {
    pub fn new() -> Self {
        Self {
            export_usecase: ExportUsecaseImpl::new(),
            datev_printer: DatevPrinter::new(),
            crosscheck_printer: CrosscheckPrinter::new(),
        }
    }

    /// Convert one month of the given backup archive. Returns the records
    /// plus both printed files; nothing is written to disk here.
    pub fn from_archive<P>(
        &self,
        archive: P,
        period: ExportPeriod,
    ) -> Result<(ExportRecords, DatevFile, CrosscheckFile)>
    where
        P: AsRef<std::path::Path>,
    {
        let records = self.export_usecase.run(archive, period)?;
        let datev = self.datev_printer.print_postings(&records);
        let crosscheck = self.crosscheck_printer.print_report(&records);
        Ok((records, datev, crosscheck))
    }
}
