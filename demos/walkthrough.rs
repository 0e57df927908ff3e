use stockbook::{Config, Inventory, Product, ProductUpdate};

fn main() -> Result<(), stockbook::Error> {
    let dir = std::env::temp_dir().join("stockbook_walkthrough");
    let _ = std::fs::remove_dir_all(&dir);
    let inv = Inventory::new(&Config::in_dir(&dir));

    // register a plain and a discounted product
    inv.products
        .register(Product::new("P1", "Notebook", 4.5, "stationery", 20))?;
    inv.products
        .register(Product::new("P2", "Fountain pen", 30.0, "stationery", 3).discounted(0.2))?;

    // duplicate ids are refused
    if let Err(e) = inv.products.register(Product::new("P1", "Dup", 1.0, "x", 1)) {
        println!("expected: {e}");
    }

    // partial update
    let changes = ProductUpdate {
        stock: Some(25),
        ..Default::default()
    };
    inv.products.update("P1", &changes)?;

    // sell some stock
    let sale = inv.record_sale("P1", 4)?;
    println!("sold {} x {} for {:.2}", sale.quantity, sale.product_id, sale.total);
    if let Err(e) = inv.record_sale("P2", 10) {
        println!("expected: {e}");
    }

    for product in inv.products.load()? {
        println!("{product}");
    }
    print!("{}", inv.sales.report()?);

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
