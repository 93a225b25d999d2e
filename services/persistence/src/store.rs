//! Order Store: date-partitioned order CRUD over flat files
//!
//! Every mutating operation follows the same cycle:
//! load entire partition → mutate in memory → serialize entire partition →
//! replace file. Nothing is cached between calls.
//!
//! Order numbers are scoped to a partition and assigned as
//! `max(existing) + 1`, starting at 1.
//!
//! There is no locking: two processes mutating the same date race and the
//! last full rewrite wins. The store is meant for one operator at a time.

use chrono::NaiveDate;
use flooring_types::ids::OrderNumber;
use flooring_types::order::Order;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::codec;
use crate::partition;
use crate::StoreError;

/// Durable, date-partitioned CRUD for orders.
pub trait OrderStore {
    /// All orders for `date` in on-disk order. Empty when no partition exists.
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Order>, StoreError>;

    /// One order by number, or `None` when absent.
    fn get(&self, date: NaiveDate, order_number: OrderNumber) -> Result<Option<Order>, StoreError>;

    /// Assign the next order number, append, and rewrite the partition.
    fn add(&self, date: NaiveDate, order: Order) -> Result<Order, StoreError>;

    /// Replace the order with the same number in place. Never creates a record.
    fn edit(&self, date: NaiveDate, order: Order) -> Result<Order, StoreError>;

    /// Extract the order with `order_number` and rewrite the partition.
    fn remove(&self, date: NaiveDate, order_number: OrderNumber) -> Result<Order, StoreError>;

    /// Dates that currently have a partition file, ascending.
    fn partition_dates(&self) -> Result<Vec<NaiveDate>, StoreError>;
}

// ── Configuration ───────────────────────────────────────────────────

/// Configuration for the file-backed store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `Orders_MMDDYYYY.txt` file per order date.
    pub orders_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(orders_dir: impl Into<PathBuf>) -> Self {
        Self {
            orders_dir: orders_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("data/orders")
    }
}

// ── File Store ──────────────────────────────────────────────────────

/// Order store keeping one flat file per order date.
#[derive(Debug, Clone)]
pub struct FileOrderStore {
    config: StoreConfig,
}

impl FileOrderStore {
    /// Open the store, creating the orders directory if it is missing.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.orders_dir)
            .map_err(|e| StoreError::io(&config.orders_dir, e))?;
        info!(orders_dir = %config.orders_dir.display(), "Order store opened");
        Ok(Self { config })
    }

    pub fn orders_dir(&self) -> &Path {
        &self.config.orders_dir
    }

    /// Path of the partition file for `date`, whether or not it exists.
    pub fn partition_path(&self, date: NaiveDate) -> Result<PathBuf, StoreError> {
        partition::partition_path(&self.config.orders_dir, date)
    }

    fn load_partition(&self, date: NaiveDate) -> Result<Vec<Order>, StoreError> {
        let path = self.partition_path(date)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(%date, "No partition file, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        let orders = codec::decode_partition(&contents, &path)?;
        debug!(%date, count = orders.len(), "Partition loaded");
        Ok(orders)
    }

    fn write_partition(&self, date: NaiveDate, orders: &[Order]) -> Result<(), StoreError> {
        let path = self.partition_path(date)?;
        write_atomically(&path, &codec::encode_partition(orders))?;
        debug!(%date, count = orders.len(), "Partition written");
        Ok(())
    }
}

impl OrderStore for FileOrderStore {
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Order>, StoreError> {
        self.load_partition(date)
    }

    fn get(&self, date: NaiveDate, order_number: OrderNumber) -> Result<Option<Order>, StoreError> {
        Ok(self
            .load_partition(date)?
            .into_iter()
            .find(|o| o.order_number == order_number))
    }

    fn add(&self, date: NaiveDate, mut order: Order) -> Result<Order, StoreError> {
        codec::check_fields(&order)?;

        let mut orders = self.load_partition(date)?;
        let Some(next) = OrderNumber::next_after(orders.iter().map(|o| o.order_number)) else {
            warn!(%date, "Partition has no order numbers left");
            return Err(StoreError::OrderNumbersExhausted(date));
        };
        order.order_number = next;
        orders.push(order.clone());
        self.write_partition(date, &orders)?;

        info!(%date, order_number = %order.order_number, total = %order.total, "Order added");
        Ok(order)
    }

    fn edit(&self, date: NaiveDate, order: Order) -> Result<Order, StoreError> {
        codec::check_fields(&order)?;

        let mut orders = self.load_partition(date)?;
        let Some(slot) = orders
            .iter_mut()
            .find(|o| o.order_number == order.order_number)
        else {
            warn!(%date, order_number = %order.order_number, "Edit of unknown order");
            return Err(StoreError::OrderNotFound {
                order_number: order.order_number,
                date,
            });
        };
        *slot = order.clone();
        self.write_partition(date, &orders)?;

        info!(%date, order_number = %order.order_number, "Order edited");
        Ok(order)
    }

    fn remove(&self, date: NaiveDate, order_number: OrderNumber) -> Result<Order, StoreError> {
        let mut orders = self.load_partition(date)?;
        let Some(idx) = orders.iter().position(|o| o.order_number == order_number) else {
            warn!(%date, %order_number, "Removal of unknown order");
            return Err(StoreError::OrderNotFound { order_number, date });
        };
        let removed = orders.remove(idx);
        self.write_partition(date, &orders)?;

        info!(%date, %order_number, remaining = orders.len(), "Order removed");
        Ok(removed)
    }

    fn partition_dates(&self) -> Result<Vec<NaiveDate>, StoreError> {
        let dir = &self.config.orders_dir;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
            let entry = entry.map_err(|e| StoreError::io(dir, e))?;
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(date) = partition::parse_partition_file_name(&name) {
                dates.push(date);
            }
        }
        dates.sort();
        Ok(dates)
    }
}

/// Replace `path` with `contents`: write a sibling tmp file, fsync, rename.
///
/// The tmp file is removed again if any step fails.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = replace_with_tmp(&tmp_path, path, contents);
    if result.is_err() && tmp_path.exists() {
        if let Err(e) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %e, "Could not remove tmp file");
        }
    }
    result
}

fn replace_with_tmp(tmp_path: &Path, path: &Path, contents: &str) -> Result<(), StoreError> {
    {
        let mut file = File::create(tmp_path).map_err(|e| StoreError::io(tmp_path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| StoreError::io(tmp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(tmp_path, e))?;
    }
    fs::rename(tmp_path, path).map_err(|e| StoreError::io(path, e))
}

// ── Tests ───────────────────────────────────────────────────────────


// ── Property-Based Tests ────────────────────────────────────────────
