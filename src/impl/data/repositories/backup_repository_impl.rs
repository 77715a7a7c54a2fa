use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr as _,
};

use rust_decimal::Decimal;

use crate::{
    data::{
        datasources::{
            archive_datasource::{ArchiveDatasource, ZipArchiveDatasourceImpl},
            tables_datasource::{TablesDatasource, TablesDatasourceImpl},
        },
        models::{
            date_model::DateModel, datetime_model::DateTimeModel, flag_model::FlagModel,
            money_model::MoneyModel,
        },
    },
    domain::repositories::backup_repository::BackupRepository,
    entities::{Backup, InvoiceRecord, ItemDomain, LineItem, Payment, RowId, Table, TaxTable},
    errors::{ExportError, Result},
};

const TABLES: [&str; 7] = [
    "invoices",
    "invoice_product",
    "invoice_medication",
    "invoice_service",
    "payments",
    "tax",
    "clients",
];

pub(crate) struct BackupRepositoryImpl<DS1, DS2>
where
    DS1: ArchiveDatasource,
    DS2: TablesDatasource,
{
    archive_datasource: DS1,
    tables_datasource: DS2,
}

impl<DS1, DS2> BackupRepository for BackupRepositoryImpl<DS1, DS2>
where
    DS1: ArchiveDatasource,
    DS2: TablesDatasource,
{
    fn load<P>(&self, archive: P) -> Result<Backup>
    where
        P: AsRef<std::path::Path>,
    {
        let mut tables: BTreeMap<&'static str, Table> = BTreeMap::new();
        for (name, content) in self.archive_datasource.tables(archive.as_ref(), &TABLES)? {
            tables.insert(name, self.tables_datasource.from_string(name, &content)?);
        }
        let invoices_table = take(&mut tables, "invoices")?;
        let products_table = take(&mut tables, "invoice_product")?;
        let medication_table = take(&mut tables, "invoice_medication")?;
        let services_table = take(&mut tables, "invoice_service")?;
        let payments_table = take(&mut tables, "payments")?;
        let tax_table = take(&mut tables, "tax")?;
        let clients = take(&mut tables, "clients")?;

        // Invoices. Cells of invoices that never reached `complete` may be
        // unfilled; nothing of them is posted, so nothing of them is parsed.
        let mut invoices = Vec::with_capacity(invoices_table.len());
        for id in invoices_table.ids() {
            let complete = invoices_table.get(id, "status")? == "complete";
            let date_cell = invoices_table.get(id, "date")?;
            let date = if complete && !date_cell.is_empty() {
                Some(DateModel::from_str(date_cell)?.into())
            } else {
                None
            };
            let total = if complete {
                MoneyModel::from_str(invoices_table.get(id, "total")?)?.into()
            } else {
                Decimal::ZERO
            };
            invoices.push(InvoiceRecord {
                id: id.clone(),
                client_id: RowId::new(invoices_table.get(id, "client_id")?),
                number: invoices_table.get(id, "number")?.to_string(),
                date,
                total,
                complete,
            });
        }
        let complete: BTreeSet<RowId> = invoices
            .iter()
            .filter(|r| r.complete)
            .map(|r| r.id.clone())
            .collect();

        // Line items of the three detail tables. Medication rows carry an
        // `applied` flag that moves them into their own revenue group.
        let mut line_items = Vec::new();
        collect_line_items(
            &products_table,
            &complete,
            |_| ItemDomain::Products,
            &mut line_items,
        )?;
        collect_line_items(
            &medication_table,
            &complete,
            |applied| {
                if applied {
                    ItemDomain::MedicationApplied
                } else {
                    ItemDomain::Medication
                }
            },
            &mut line_items,
        )?;
        collect_line_items(
            &services_table,
            &complete,
            |_| ItemDomain::Services,
            &mut line_items,
        )?;

        // Payments.
        let mut payments = Vec::with_capacity(payments_table.len());
        for id in payments_table.ids() {
            let invoice_cell = payments_table.get(id, "invoice_id")?;
            payments.push(Payment {
                id: id.clone(),
                invoice_id: if invoice_cell.is_empty() {
                    None
                } else {
                    Some(RowId::new(invoice_cell))
                },
                date: DateTimeModel::from_str(payments_table.get(id, "date")?)?.into(),
                method: payments_table.get(id, "method")?.parse()?,
                amount: MoneyModel::from_str(payments_table.get(id, "amount")?)?.into(),
                payment_type: payments_table.get(id, "paymenttype")?.to_string(),
                notes: payments_table.get(id, "notes")?.to_string(),
                username: payments_table.get(id, "username")?.to_string(),
                deleted: FlagModel::from_str(payments_table.get(id, "deleted")?)?.into(),
            });
        }

        // Tax rates.
        let mut rates: BTreeMap<RowId, Decimal> = BTreeMap::new();
        for id in tax_table.ids() {
            rates.insert(
                id.clone(),
                MoneyModel::from_str(tax_table.get(id, "rate")?)?.into(),
            );
        }

        Ok(Backup {
            invoices,
            line_items,
            payments,
            tax: TaxTable::new(rates),
            clients,
        })
    }
}

impl BackupRepositoryImpl<ZipArchiveDatasourceImpl, TablesDatasourceImpl> {
    pub(crate) fn new() -> Self {
        BackupRepositoryImpl {
            archive_datasource: ZipArchiveDatasourceImpl::new(),
            tables_datasource: TablesDatasourceImpl::new(),
        }
    }
}

fn take(tables: &mut BTreeMap<&'static str, Table>, name: &'static str) -> Result<Table> {
    tables.remove(name).ok_or(ExportError::MissingTable(name))
}

/// Line items of one detail table, restricted to complete invoices (rows of
/// draft invoices may be unfilled). The `amount`, `factor` and `count`
/// columns are optional per table; an absent column counts as 1.
fn collect_line_items(
    table: &Table,
    invoices: &BTreeSet<RowId>,
    domain_of: impl Fn(bool) -> ItemDomain,
    items: &mut Vec<LineItem>,
) -> Result<()> {
    let has_amount = table.has_column("amount");
    let has_factor = table.has_column("factor");
    let has_count = table.has_column("count");
    let has_applied = table.has_column("applied");
    for id in table.ids() {
        let invoice_id = RowId::new(table.get(id, "invoice_id")?);
        if !invoices.contains(&invoice_id) {
            continue;
        }
        let applied = has_applied && FlagModel::from_str(table.get(id, "applied")?)?.0;
        let amount = if has_amount {
            MoneyModel::from_str(table.get(id, "amount")?)?
        } else {
            MoneyModel(Decimal::ONE)
        };
        let factor = if has_factor {
            MoneyModel::from_str(table.get(id, "factor")?)?
        } else {
            MoneyModel(Decimal::ONE)
        };
        let count = if has_count {
            MoneyModel::from_str(table.get(id, "count")?)?
        } else {
            MoneyModel(Decimal::ONE)
        };
        items.push(LineItem {
            invoice_id,
            domain: domain_of(applied),
            amount: amount.into(),
            factor: factor.into(),
            count: count.into(),
            price: MoneyModel::from_str(table.get(id, "price")?)?.into(),
            tax_id: RowId::new(table.get(id, "tax_id")?),
        });
    }
    Ok(())
}
