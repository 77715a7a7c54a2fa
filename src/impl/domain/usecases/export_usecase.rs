use crate::{
    data::{
        datasources::{
            archive_datasource::ZipArchiveDatasourceImpl, tables_datasource::TablesDatasourceImpl,
        },
        repositories::backup_repository_impl::BackupRepositoryImpl,
    },
    domain::{
        logic::monthly_driver::MonthlyDriver,
        repositories::backup_repository::BackupRepository,
    },
    entities::{ExportPeriod, ExportRecords},
    errors::Result,
};

/// Loads one backup archive and converts the requested month.
pub trait ExportUsecase {
    fn run<P>(&self, archive: P, period: ExportPeriod) -> Result<ExportRecords>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ExportUsecaseImpl<
    R1 = BackupRepositoryImpl<ZipArchiveDatasourceImpl, TablesDatasourceImpl>, // Default.
> where
    R1: BackupRepository,
{
    backup_repository: R1,
}

impl<R1> ExportUsecase for ExportUsecaseImpl<R1>
where
    R1: BackupRepository,
{
    fn run<P>(&self, archive: P, period: ExportPeriod) -> Result<ExportRecords>
    where
        P: AsRef<std::path::Path>,
    {
        let backup = self.backup_repository.load(archive)?;
        MonthlyDriver::new(backup, period).process()
    }
}

impl ExportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ExportUsecaseImpl {
            backup_repository: BackupRepositoryImpl::new(),
        }
    }
}
