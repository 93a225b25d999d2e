//! Reference data: products and state tax rates
//!
//! Both tables are headered comma-separated files with three columns. They are
//! re-read on every call, so edits to the files show up immediately and there
//! is no cache to invalidate.

use flooring_types::errors::FlooringError;
use flooring_types::product::{lookup_key, Product};
use flooring_types::tax::TaxEntry;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Source of flooring products.
pub trait ProductCatalog {
    fn list_products(&self) -> Result<Vec<Product>, FlooringError>;

    /// Case-insensitive lookup by trimmed product type. Blank names find nothing.
    fn lookup_product(&self, product_type: &str) -> Result<Option<Product>, FlooringError> {
        let key = lookup_key(product_type);
        if key.is_empty() {
            return Ok(None);
        }
        Ok(self.list_products()?.into_iter().find(|p| p.key() == key))
    }
}

/// Source of state tax rates.
pub trait TaxTable {
    fn list_tax_rates(&self) -> Result<Vec<TaxEntry>, FlooringError>;

    /// Case-insensitive lookup by trimmed state abbreviation. Blank codes find nothing.
    fn lookup_tax_rate(&self, state: &str) -> Result<Option<TaxEntry>, FlooringError> {
        let key = lookup_key(state);
        if key.is_empty() {
            return Ok(None);
        }
        Ok(self.list_tax_rates()?.into_iter().find(|t| t.key() == key))
    }
}

/// Products read from `ProductType,CostPerSquareFoot,LaborCostPerSquareFoot`.
#[derive(Debug, Clone)]
pub struct FileProductCatalog {
    path: PathBuf,
}

impl FileProductCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductCatalog for FileProductCatalog {
    fn list_products(&self) -> Result<Vec<Product>, FlooringError> {
        read_table(&self.path)?
            .into_iter()
            .map(|(line, [name, cost, labor])| -> Result<Product, FlooringError> {
                Ok(Product::new(
                    name,
                    parse_decimal(&self.path, line, &cost)?,
                    parse_decimal(&self.path, line, &labor)?,
                ))
            })
            .collect()
    }
}

/// Tax rates read from `State,StateName,TaxRate`.
#[derive(Debug, Clone)]
pub struct FileTaxTable {
    path: PathBuf,
}

impl FileTaxTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaxTable for FileTaxTable {
    fn list_tax_rates(&self) -> Result<Vec<TaxEntry>, FlooringError> {
        read_table(&self.path)?
            .into_iter()
            .map(|(line, [abbreviation, name, rate])| -> Result<TaxEntry, FlooringError> {
                Ok(TaxEntry::new(
                    abbreviation,
                    name,
                    parse_decimal(&self.path, line, &rate)?,
                ))
            })
            .collect()
    }
}

/// Read a headered three-column table.
///
/// Returns `(line_number, fields)` with each field trimmed. Rows that do not
/// have exactly three fields are skipped.
fn read_table(path: &Path) -> Result<Vec<(usize, [String; 3])>, FlooringError> {
    let contents = fs::read_to_string(path).map_err(|e| FlooringError::ReferenceData {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for (idx, line) in contents.lines().enumerate().skip(1) {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        match tokens.as_slice() {
            [a, b, c] => rows.push((idx + 1, [a.to_string(), b.to_string(), c.to_string()])),
            _ => {
                if !line.trim().is_empty() {
                    debug!(path = %path.display(), line = idx + 1, "Skipping malformed reference row");
                }
            }
        }
    }
    Ok(rows)
}

fn parse_decimal(path: &Path, line: usize, raw: &str) -> Result<Decimal, FlooringError> {
    Decimal::from_str(raw).map_err(|e| FlooringError::ReferenceData {
        path: path.to_path_buf(),
        detail: format!("line {}: {:?} is not a number ({})", line, raw, e),
    })
}
