//! Row Codec: comma-separated order rows
//!
//! # Row Format
//! ```text
//! OrderNumber,CustomerName,State,TaxRate,ProductType,Area,CostPerSquareFoot,
//! LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total
//! ```
//! One header line, then one row per order. Fields are not quoted or escaped,
//! so text fields containing the delimiter are refused before writing.

use flooring_types::ids::OrderNumber;
use flooring_types::order::Order;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::StoreError;

pub const DELIMITER: char = ',';

/// Header line written at the top of every partition file
pub const HEADER: &str = "OrderNumber,CustomerName,State,TaxRate,ProductType,Area,\
CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total";

/// Number of fields in one order row
pub const FIELD_COUNT: usize = 12;

/// Refuse text fields that would break the row layout.
pub fn check_fields(order: &Order) -> Result<(), StoreError> {
    let text_fields = [
        ("CustomerName", &order.customer_name),
        ("State", &order.state),
        ("ProductType", &order.product_type),
    ];
    for (field, value) in text_fields {
        if value.contains([DELIMITER, '\n', '\r']) {
            return Err(StoreError::UnsafeField {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Serialize one order as a row (no trailing newline).
pub fn encode_row(order: &Order) -> String {
    [
        order.order_number.to_string(),
        order.customer_name.clone(),
        order.state.clone(),
        order.tax_rate.to_string(),
        order.product_type.clone(),
        order.area.to_string(),
        order.cost_per_square_foot.to_string(),
        order.labor_cost_per_square_foot.to_string(),
        order.material_cost.to_string(),
        order.labor_cost.to_string(),
        order.tax.to_string(),
        order.total.to_string(),
    ]
    .join(&DELIMITER.to_string())
}

/// Parse one row. The error string describes the first bad field.
pub fn decode_row(line: &str) -> Result<Order, String> {
    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            tokens.len()
        ));
    }

    let order_number = tokens[0]
        .parse::<OrderNumber>()
        .map_err(|e| format!("OrderNumber {:?}: {}", tokens[0], e))?;

    Ok(Order {
        order_number,
        customer_name: tokens[1].to_string(),
        state: tokens[2].to_string(),
        tax_rate: decimal_field("TaxRate", tokens[3])?,
        product_type: tokens[4].to_string(),
        area: decimal_field("Area", tokens[5])?,
        cost_per_square_foot: decimal_field("CostPerSquareFoot", tokens[6])?,
        labor_cost_per_square_foot: decimal_field("LaborCostPerSquareFoot", tokens[7])?,
        material_cost: decimal_field("MaterialCost", tokens[8])?,
        labor_cost: decimal_field("LaborCost", tokens[9])?,
        tax: decimal_field("Tax", tokens[10])?,
        total: decimal_field("Total", tokens[11])?,
    })
}

fn decimal_field(name: &str, raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw).map_err(|e| format!("{} {:?}: {}", name, raw, e))
}

/// Serialize a whole partition: header plus one line per order.
pub fn encode_partition(orders: &[Order]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + orders.len() * 96);
    out.push_str(HEADER);
    out.push('\n');
    for order in orders {
        out.push_str(&encode_row(order));
        out.push('\n');
    }
    out
}

/// Parse a whole partition file.
///
/// The first line is the header and is skipped whatever it contains. Blank
/// lines are ignored. `path` is only used for error reporting.
pub fn decode_partition(contents: &str, path: &Path) -> Result<Vec<Order>, StoreError> {
    let mut orders = Vec::new();
    for (idx, line) in contents.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let order = decode_row(line).map_err(|detail| StoreError::Corrupt {
            path: path.to_path_buf(),
            line: idx + 1,
            detail,
        })?;
        orders.push(order);
    }
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn priced_order(number: u32, name: &str) -> Order {
        Order {
            order_number: OrderNumber::new(number),
            customer_name: name.to_string(),
            state: "TX".to_string(),
            tax_rate: dec("4.45"),
            product_type: "Tile".to_string(),
            area: dec("100.00"),
            cost_per_square_foot: dec("3.50"),
            labor_cost_per_square_foot: dec("4.15"),
            material_cost: dec("350.0000"),
            labor_cost: dec("415.0000"),
            tax: dec("34.04"),
            total: dec("799.04"),
        }
    }

    #[test]
    fn test_encode_row_field_order() {
        let row = encode_row(&priced_order(1, "Ada Lovelace"));
        assert_eq!(
            row,
            "1,Ada Lovelace,TX,4.45,Tile,100.00,3.50,4.15,350.0000,415.0000,34.04,799.04"
        );
    }

    #[test]
    fn test_header_matches_field_count() {
        assert_eq!(HEADER.split(DELIMITER).count(), FIELD_COUNT);
        assert!(HEADER.starts_with("OrderNumber,CustomerName"));
        assert!(HEADER.ends_with("Tax,Total"));
    }

    #[test]
    fn test_decode_row_preserves_scale() {
        let original = priced_order(3, "Grace O'Malley-Smith Jr.");
        let decoded = decode_row(&encode_row(&original)).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.material_cost.to_string(), "350.0000");
    }

    #[test]
    fn test_decode_row_wrong_field_count() {
        let err = decode_row("1,Smith, Inc,TX,4.45,Tile,100,3.50,4.15,350,415,34.04,799.04")
            .unwrap_err();
        assert!(err.contains("expected 12 fields, found 13"));
    }

    #[test]
    fn test_decode_row_bad_number() {
        let err = decode_row("x,Ada,TX,4.45,Tile,100,3.50,4.15,350,415,34.04,799.04")
            .unwrap_err();
        assert!(err.starts_with("OrderNumber"));

        let err = decode_row("1,Ada,TX,4.45,Tile,lots,3.50,4.15,350,415,34.04,799.04")
            .unwrap_err();
        assert!(err.starts_with("Area"));
    }

    #[test]
    fn test_check_fields_rejects_delimiter() {
        let mut order = priced_order(1, "Smith, Inc");
        assert!(matches!(
            check_fields(&order),
            Err(StoreError::UnsafeField { field: "CustomerName", .. })
        ));

        order.customer_name = "Smith Inc".to_string();
        order.product_type = "Tile\nWood".to_string();
        assert!(matches!(
            check_fields(&order),
            Err(StoreError::UnsafeField { field: "ProductType", .. })
        ));
    }

    #[test]
    fn test_partition_header_only_when_empty() {
        let contents = encode_partition(&[]);
        assert_eq!(contents, format!("{}\n", HEADER));
        assert!(decode_partition(&contents, Path::new("x")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_partition_skips_header_and_blank_lines() {
        let orders = vec![priced_order(1, "Ada"), priced_order(2, "Grace")];
        let mut contents = encode_partition(&orders);
        contents.push_str("\n\n");

        let decoded = decode_partition(&contents, Path::new("x")).unwrap();
        assert_eq!(decoded, orders);
    }

    #[test]
    fn test_decode_partition_accepts_crlf() {
        let contents = format!("{}\r\n{}\r\n", HEADER, encode_row(&priced_order(1, "Ada")));
        let decoded = decode_partition(&contents, Path::new("x")).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].total, dec("799.04"));
    }

    #[test]
    fn test_decode_partition_reports_line_number() {
        let contents = format!(
            "{}\n{}\nnot,a,row\n",
            HEADER,
            encode_row(&priced_order(1, "Ada"))
        );
        match decode_partition(&contents, Path::new("Orders_01012030.txt")) {
            Err(StoreError::Corrupt { line, path, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(path, Path::new("Orders_01012030.txt"));
            }
            other => panic!("expected corrupt row, got {:?}", other),
        }
    }
}
