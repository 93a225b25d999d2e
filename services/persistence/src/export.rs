//! Data export: every partition in one file
//!
//! Writes all orders, sorted by order date and then by on-disk position,
//! to a single headered file. Each row is the partition row followed by the
//! order date as `MM-DD-YYYY`.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::codec::{self, DELIMITER};
use crate::store::{write_atomically, OrderStore};
use crate::StoreError;

/// Header line of the export file
pub const EXPORT_HEADER: &str = "OrderNumber,CustomerName,State,TaxRate,ProductType,Area,\
CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,OrderDate";

const EXPORT_DATE_FORMAT: &str = "%m-%d-%Y";

/// Outcome of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub partitions: usize,
    pub orders: usize,
}

/// Format a date the way the export file writes it.
pub fn export_date(date: NaiveDate) -> String {
    date.format(EXPORT_DATE_FORMAT).to_string()
}

/// Export every order of every partition to `path`, replacing the file.
pub fn export_all<S>(store: &S, path: &Path) -> Result<ExportSummary, StoreError>
where
    S: OrderStore + ?Sized,
{
    let dates = store.partition_dates()?;

    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    let mut orders = 0;
    for date in &dates {
        let stamp = export_date(*date);
        for order in store.list_by_date(*date)? {
            out.push_str(&codec::encode_row(&order));
            out.push(DELIMITER);
            out.push_str(&stamp);
            out.push('\n');
            orders += 1;
        }
    }

    write_atomically(path, &out)?;
    info!(path = %path.display(), partitions = dates.len(), orders, "Orders exported");

    Ok(ExportSummary {
        path: path.to_path_buf(),
        partitions: dates.len(),
        orders,
    })
}
