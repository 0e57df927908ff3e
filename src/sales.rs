//! Sales ledger backed by one JSON file, plus the report over it.

use crate::error::{Error, Result};
use crate::model::{Product, Sale};
use crate::store::JsonFile;
use chrono::NaiveDateTime;
use log::info;
use std::path::Path;

/// Load/save and append over the sales file.
#[derive(Debug)]
pub struct SaleStore {
    file: JsonFile<Sale>,
}

impl SaleStore {
    /// Store over `path` with pretty-printed output.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(JsonFile::open(path))
    }

    /// Store over an already configured file.
    pub fn new(file: JsonFile<Sale>) -> Self {
        Self { file }
    }

    /// Path to the sales file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Every sale on disk. Malformed content is an error.
    pub fn load(&self) -> Result<Vec<Sale>> {
        self.file.load()
    }

    /// Every sale on disk, or none if the file can't be parsed.
    pub fn load_or_empty(&self) -> Vec<Sale> {
        self.file.load_or_empty()
    }

    /// Overwrite the sales file with `sales`.
    pub fn save(&self, sales: &[Sale]) -> Result<()> {
        self.file.save(sales)
    }

    /// Sell `quantity` units of `product_id` out of `products`.
    ///
    /// On success the sale is appended to the sales file and the matching
    /// entry in `products` has its stock reduced; persisting `products` is
    /// left to the caller. On error neither `products` nor the sales file
    /// changes.
    pub fn record(
        &self,
        products: &mut [Product],
        product_id: &str,
        quantity: u32,
        at: NaiveDateTime,
    ) -> Result<Sale> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity(quantity));
        }
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| Error::NotFound(product_id.to_string()))?;
        if product.stock < quantity {
            return Err(Error::InsufficientStock {
                id: product.id.clone(),
                requested: quantity,
                available: product.stock,
            });
        }

        let sale = Sale {
            product_id: product.id.clone(),
            quantity,
            date: at,
            total: product.price * f64::from(quantity),
        };
        self.file.modify(|sales| {
            sales.push(sale.clone());
            Ok(())
        })?;
        product.take_stock(quantity);
        info!(
            "sold {quantity} x {product_id} for {:.2}, {} left",
            sale.total, product.stock
        );
        Ok(sale)
    }

    /// Every recorded sale with running totals.
    pub fn report(&self) -> Result<SalesReport> {
        Ok(SalesReport::new(self.load()?))
    }
}

/// All recorded sales with unit and revenue totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    /// Sales in the order they were recorded.
    pub sales: Vec<Sale>,
    /// Sum of quantities.
    pub total_units: u64,
    /// Sum of totals.
    pub total_revenue: f64,
}

impl SalesReport {
    /// Summarize `sales`.
    pub fn new(sales: Vec<Sale>) -> Self {
        let total_units = sales.iter().map(|s| u64::from(s.quantity)).sum();
        let total_revenue = sales.iter().map(|s| s.total).sum();
        Self {
            sales,
            total_units,
            total_revenue,
        }
    }

    /// `true` when there's nothing to report.
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

impl std::fmt::Display for SalesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sales.is_empty() {
            return writeln!(f, "No sales recorded.");
        }
        for sale in &self.sales {
            writeln!(
                f,
                "Product ID: {} - Quantity: {} - Total: {:.2}",
                sale.product_id, sale.quantity, sale.total
            )?;
        }
        writeln!(
            f,
            "{} sale(s), {} unit(s), revenue {:.2}",
            self.sales.len(),
            self.total_units,
            self.total_revenue
        )
    }
}
