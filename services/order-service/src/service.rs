//! Flooring service: validation, pricing and persistence wired together
//!
//! Control flow for a new order:
//! 1. Validate the candidate (name, product, state, area)
//! 2. Check the order date is in the future
//! 3. Price it from the entries resolved in step 1
//! 4. Hand it to the store, which assigns the order number

use chrono::{Local, NaiveDate};
use flooring_types::errors::FlooringError;
use flooring_types::ids::OrderNumber;
use flooring_types::order::Order;
use flooring_types::product::Product;
use flooring_types::tax::TaxEntry;
use persistence::{export_all, ExportSummary, OrderStore};
use std::path::Path;
use tracing::{info, warn};

use crate::calculator::{self, CostBreakdown};
use crate::reference::{ProductCatalog, TaxTable};
use crate::validator::{self, ResolvedRates};

/// Today's date in the local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Order operations over a store and its reference data.
pub struct FlooringService<S, P, T> {
    store: S,
    products: P,
    taxes: T,
    today: fn() -> NaiveDate,
}

impl<S, P, T> FlooringService<S, P, T>
where
    S: OrderStore,
    P: ProductCatalog,
    T: TaxTable,
{
    pub fn new(store: S, products: P, taxes: T) -> Self {
        Self {
            store,
            products,
            taxes,
            today: local_today,
        }
    }

    /// Replace the clock used for the future-date rule.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Today's date according to the service clock.
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    // ── Orders ──────────────────────────────────────────────────────

    pub fn orders_by_date(&self, date: NaiveDate) -> Result<Vec<Order>, FlooringError> {
        Ok(self.store.list_by_date(date)?)
    }

    /// `None` when the order does not exist; never an error for absence.
    pub fn order(
        &self,
        date: NaiveDate,
        order_number: OrderNumber,
    ) -> Result<Option<Order>, FlooringError> {
        Ok(self.store.get(date, order_number)?)
    }

    /// Validate, price and persist a new order dated `date`.
    pub fn add_order(&self, date: NaiveDate, mut order: Order) -> Result<Order, FlooringError> {
        let rates = self.checked(&order)?;
        validator::validate_future_date(date, self.today()).inspect_err(|e| {
            warn!(%date, error = %e, "Order rejected");
        })?;

        Self::price(&mut order, &rates)?;
        let stored = self.store.add(date, order)?;
        info!(%date, order_number = %stored.order_number, "Order placed");
        Ok(stored)
    }

    /// Re-validate, re-price and replace an existing order.
    ///
    /// Past dates are allowed. Fails when `order.order_number` is not in the
    /// date's partition.
    pub fn edit_order(&self, date: NaiveDate, mut order: Order) -> Result<Order, FlooringError> {
        let rates = self.checked(&order)?;
        Self::price(&mut order, &rates)?;
        Ok(self.store.edit(date, order)?)
    }

    /// Remove an order; fails when it does not exist.
    pub fn remove_order(
        &self,
        date: NaiveDate,
        order_number: OrderNumber,
    ) -> Result<Order, FlooringError> {
        Ok(self.store.remove(date, order_number)?)
    }

    /// Validate and price a candidate in place without storing it.
    pub fn calculate_costs(&self, order: &mut Order) -> Result<CostBreakdown, FlooringError> {
        let rates = self.checked(order)?;
        Self::price(order, &rates)
    }

    /// Write every stored order to one export file.
    pub fn export_all(&self, path: &Path) -> Result<ExportSummary, FlooringError> {
        Ok(export_all(&self.store, path)?)
    }

    // ── Reference data ──────────────────────────────────────────────

    pub fn list_products(&self) -> Result<Vec<Product>, FlooringError> {
        self.products.list_products()
    }

    pub fn list_tax_rates(&self) -> Result<Vec<TaxEntry>, FlooringError> {
        self.taxes.list_tax_rates()
    }

    // ── Internals ───────────────────────────────────────────────────

    fn checked(&self, order: &Order) -> Result<ResolvedRates, FlooringError> {
        validator::validate_order(order, &self.products, &self.taxes).inspect_err(|e| {
            if e.is_validation() {
                warn!(error = %e, "Order rejected");
            }
        })
    }

    /// Normalize names to the reference spelling and fill the derived fields.
    fn price(order: &mut Order, rates: &ResolvedRates) -> Result<CostBreakdown, FlooringError> {
        order.customer_name = order.customer_name.trim().to_string();
        order.product_type = rates.product.product_type.clone();
        order.state = rates.tax.state_abbreviation.clone();
        calculator::price_order(order, &rates.product, &rates.tax).inspect_err(|e| {
            warn!(error = %e, "Order could not be priced");
        })
    }
}
