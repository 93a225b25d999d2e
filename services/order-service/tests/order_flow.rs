//! Order flow tests against the shipped reference data
//!
//! Runs the full validate → price → store cycle using `data/Products.txt`
//! and `data/Taxes.txt` from the repository root.

use chrono::NaiveDate;
use flooring_types::errors::{ErrorKind, FlooringError};
use flooring_types::ids::OrderNumber;
use flooring_types::order::Order;
use order_service::{FileProductCatalog, FileTaxTable, FlooringService, ProductCatalog, TaxTable};
use persistence::{FileOrderStore, StoreConfig};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tempfile::TempDir;

type Service = FlooringService<FileOrderStore, FileProductCatalog, FileTaxTable>;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 3, 1).unwrap()
}

fn install_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 4, 15).unwrap()
}

fn service(tmp: &TempDir) -> Service {
    let store = FileOrderStore::open(StoreConfig::new(tmp.path().join("orders"))).unwrap();
    FlooringService::new(
        store,
        FileProductCatalog::new(data_dir().join("Products.txt")),
        FileTaxTable::new(data_dir().join("Taxes.txt")),
    )
    .with_clock(today)
}

#[test]
fn shipped_reference_data_loads() {
    let products = FileProductCatalog::new(data_dir().join("Products.txt"));
    let taxes = FileTaxTable::new(data_dir().join("Taxes.txt"));

    assert_eq!(products.list_products().unwrap().len(), 4);
    assert_eq!(
        products.lookup_product("wood").unwrap(),
        products.lookup_product("Wood").unwrap()
    );
    assert_eq!(taxes.lookup_tax_rate("tx").unwrap().unwrap().tax_rate, dec("4.45"));
}

#[test]
fn tile_in_texas_prices_to_reference_total() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let stored = svc
        .add_order(install_date(), Order::new("Ada Lovelace", "TX", "Tile", dec("100")))
        .unwrap();

    assert_eq!(stored.material_cost, dec("350.00"));
    assert_eq!(stored.labor_cost, dec("415.00"));
    assert_eq!(stored.tax, dec("34.04"));
    assert_eq!(stored.total, dec("799.04"));

    let read_back = svc
        .order(install_date(), stored.order_number)
        .unwrap()
        .unwrap();
    assert_eq!(read_back, stored);
}

#[test]
fn area_boundary() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let err = svc
        .add_order(install_date(), Order::new("Ada", "TX", "Tile", dec("99.99")))
        .unwrap_err();
    assert!(matches!(err, FlooringError::AreaTooSmall(_)));

    let ok = svc
        .add_order(install_date(), Order::new("Ada", "TX", "Tile", dec("100.00")))
        .unwrap();
    assert_eq!(ok.order_number, OrderNumber::new(1));
}

#[test]
fn errors_are_tagged_by_kind() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    let invalid = svc
        .add_order(install_date(), Order::new("Ada", "NY", "Tile", dec("150")))
        .unwrap_err();
    assert_eq!(invalid.kind(), ErrorKind::Validation);

    let missing = svc
        .remove_order(install_date(), OrderNumber::new(8))
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::Storage);
}

#[test]
fn numbering_survives_removal() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&tmp);

    for name in ["Ada", "Grace", "Linus"] {
        svc.add_order(install_date(), Order::new(name, "KY", "Laminate", dec("200")))
            .unwrap();
    }
    svc.remove_order(install_date(), OrderNumber::new(3)).unwrap();
    let next = svc
        .add_order(install_date(), Order::new("Ken", "KY", "Laminate", dec("200")))
        .unwrap();

    // max existing is 2 after removing 3, so 3 is handed out again
    assert_eq!(next.order_number, OrderNumber::new(3));

    svc.remove_order(install_date(), OrderNumber::new(1)).unwrap();
    let after_low_removal = svc
        .add_order(install_date(), Order::new("Barbara", "KY", "Laminate", dec("200")))
        .unwrap();
    assert_eq!(after_low_removal.order_number, OrderNumber::new(4));
}
