//! Both stores together, for operations that touch both files.

use crate::config::Config;
use crate::error::Result;
use crate::model::Sale;
use crate::products::ProductStore;
use crate::sales::SaleStore;
use crate::store::JsonFile;
use chrono::{Local, NaiveDateTime, Timelike};

/// Product catalogue plus sales ledger.
#[derive(Debug)]
pub struct Inventory {
    /// Products file.
    pub products: ProductStore,
    /// Sales file.
    pub sales: SaleStore,
}

impl Inventory {
    /// Open both stores as `config` describes. No file is read yet.
    pub fn new(config: &Config) -> Self {
        let products = JsonFile::builder(&config.products_path)
            .pretty(config.pretty)
            .build();
        let sales = JsonFile::builder(&config.sales_path)
            .pretty(config.pretty)
            .build();
        Self {
            products: ProductStore::new(products),
            sales: SaleStore::new(sales),
        }
    }

    /// Record a sale stamped with the current local time.
    pub fn record_sale(&self, product_id: &str, quantity: u32) -> Result<Sale> {
        let now = Local::now().naive_local();
        // the file only keeps whole seconds
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.record_sale_at(product_id, quantity, now)
    }

    /// Record a sale at `at`: append to the sales file, then rewrite the
    /// products file with the reduced stock.
    ///
    /// The two writes are not atomic together. If the products save fails the
    /// sale is already in the sales file while the stock on disk is unchanged;
    /// the error is returned and nothing is rolled back.
    pub fn record_sale_at(
        &self,
        product_id: &str,
        quantity: u32,
        at: NaiveDateTime,
    ) -> Result<Sale> {
        let mut products = self.products.load_or_empty();
        let sale = self.sales.record(&mut products, product_id, quantity, at)?;
        self.products.save(&products)?;
        Ok(sale)
    }
}
