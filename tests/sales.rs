use chrono::NaiveDateTime;
use stockbook::{Config, Error, Inventory, Product, SalesReport};
use tempfile::TempDir;

fn temp_inventory() -> (TempDir, Inventory) {
    let dir = tempfile::tempdir().unwrap();
    let inv = Inventory::new(&Config::in_dir(dir.path()));
    (dir, inv)
}

fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn sale_decrements_stock_and_appends_record() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 10.0, "office", 5))
        .unwrap();

    let sale = inv
        .record_sale_at("P1", 3, at("2024-06-01 12:30:00"))
        .unwrap();
    assert_eq!(sale.product_id, "P1");
    assert_eq!(sale.quantity, 3);
    assert_eq!(sale.total, 30.0);

    assert_eq!(inv.products.get("P1").unwrap().stock, 2);
    assert_eq!(inv.sales.load().unwrap(), vec![sale]);

    let raw = std::fs::read_to_string(inv.sales.path()).unwrap();
    assert!(raw.contains("\"date\": \"2024-06-01 12:30:00\""));
}

#[test]
fn sales_accumulate() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 2.0, "office", 10))
        .unwrap();
    inv.record_sale_at("P1", 1, at("2024-06-01 09:00:00")).unwrap();
    inv.record_sale_at("P1", 4, at("2024-06-01 10:00:00")).unwrap();

    let sales = inv.sales.load().unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[1].total, 8.0);
    assert_eq!(inv.products.get("P1").unwrap().stock, 5);
}

#[test]
fn sale_can_empty_stock_exactly() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 1.5, "office", 2))
        .unwrap();
    inv.record_sale("P1", 2).unwrap();
    assert_eq!(inv.products.get("P1").unwrap().stock, 0);
}

#[test]
fn insufficient_stock_changes_nothing() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 10.0, "office", 5))
        .unwrap();
    let products_before = std::fs::read(inv.products.path()).unwrap();

    let err = inv.record_sale("P1", 6).unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientStock {
            id: "P1".into(),
            requested: 6,
            available: 5,
        }
    );
    assert_eq!(std::fs::read(inv.products.path()).unwrap(), products_before);
    assert!(!inv.sales.path().exists());
    assert!(inv.sales.load().unwrap().is_empty());
}

#[test]
fn unknown_product_is_not_found() {
    let (_dir, inv) = temp_inventory();
    assert_eq!(
        inv.record_sale("ghost", 1).unwrap_err(),
        Error::NotFound("ghost".into())
    );
    assert!(!inv.sales.path().exists());
}

#[test]
fn zero_quantity_is_rejected() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 10.0, "office", 5))
        .unwrap();
    assert_eq!(
        inv.record_sale("P1", 0).unwrap_err(),
        Error::InvalidQuantity(0)
    );
    assert_eq!(inv.products.get("P1").unwrap().stock, 5);
}

#[test]
fn record_leaves_caller_list_alone_on_error() {
    let (_dir, inv) = temp_inventory();
    let mut products = vec![Product::new("P1", "Pen", 10.0, "office", 1)];
    let err = inv
        .sales
        .record(&mut products, "P1", 2, at("2024-01-01 00:00:00"))
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientStock { .. }));
    assert_eq!(products[0].stock, 1);
}

#[test]
fn discounted_sale_uses_list_price() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 10.0, "office", 5).discounted(0.2))
        .unwrap();
    let sale = inv.record_sale("P1", 2).unwrap();
    assert_eq!(sale.total, 20.0);
}

// ---- report -----------------------------------------------------------------

#[test]
fn report_totals() {
    let (_dir, inv) = temp_inventory();
    inv.products
        .register(Product::new("P1", "Pen", 10.0, "office", 5))
        .unwrap();
    inv.products
        .register(Product::new("P2", "Ink", 2.5, "office", 5))
        .unwrap();
    inv.record_sale_at("P1", 3, at("2024-06-01 12:00:00")).unwrap();
    inv.record_sale_at("P2", 2, at("2024-06-01 12:05:00")).unwrap();

    let report = inv.sales.report().unwrap();
    assert_eq!(report.total_units, 5);
    assert_eq!(report.total_revenue, 35.0);

    let text = report.to_string();
    assert!(text.contains("Product ID: P1 - Quantity: 3 - Total: 30.00"));
    assert!(text.contains("Product ID: P2 - Quantity: 2 - Total: 5.00"));
}

#[test]
fn empty_report() {
    let report = SalesReport::new(Vec::new());
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "No sales recorded.\n");
}
