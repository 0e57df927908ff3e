//! Product and sale records as they live on disk.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Plain product or one sold at a discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductKind {
    /// Sold at list price.
    Standard,
    /// Sold at `price * (1 - discount)`, `discount` in `[0, 1]`.
    Discounted {
        /// Fraction taken off the list price.
        discount: f64,
    },
}

/// A product in the catalogue.
///
/// On disk the two kinds share one record shape; the presence of a
/// `discount` field is what marks a discounted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique key within the products file.
    pub id: String,
    /// Display name.
    pub name: String,
    /// List price per unit.
    pub price: f64,
    /// Free-form category label.
    pub category: String,
    /// Units available.
    pub stock: u32,
    /// Standard or discounted.
    pub kind: ProductKind,
}

impl Product {
    /// A standard product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            stock,
            kind: ProductKind::Standard,
        }
    }

    /// The same product, sold at a discount.
    #[must_use]
    pub fn discounted(mut self, discount: f64) -> Self {
        self.kind = ProductKind::Discounted { discount };
        self
    }

    /// Discount fraction, if any.
    pub fn discount(&self) -> Option<f64> {
        match self.kind {
            ProductKind::Standard => None,
            ProductKind::Discounted { discount } => Some(discount),
        }
    }

    /// Price after discount. Equal to `price` for standard products.
    pub fn final_price(&self) -> f64 {
        match self.kind {
            ProductKind::Standard => self.price,
            ProductKind::Discounted { discount } => self.price * (1.0 - discount),
        }
    }

    /// Take `quantity` units out of stock. Returns `false` and leaves stock
    /// alone if there aren't enough.
    pub fn take_stock(&mut self, quantity: u32) -> bool {
        match self.stock.checked_sub(quantity) {
            Some(left) => {
                self.stock = left;
                true
            }
            None => false,
        }
    }

    /// Check field constraints: non-empty id, finite non-negative price,
    /// discount within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidProduct("id must not be empty".into()));
        }
        check_price(self.price)?;
        if let Some(d) = self.discount() {
            if !(0.0..=1.0).contains(&d) {
                return Err(Error::InvalidProduct(format!(
                    "discount must be between 0 and 1, got {d}"
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidProduct(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

/// One row of the product table: id, name, price, category, stock.
impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<10} {:<20} {:<10.2} {:<15} {:<10}",
            self.id, self.name, self.price, self.category, self.stock
        )?;
        if let Some(d) = self.discount() {
            write!(f, " -{:.0}% => {:.2}", d * 100.0, self.final_price())?;
        }
        Ok(())
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    price: f64,
    category: String,
    stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount: Option<f64>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = Error;

    fn try_from(r: ProductRecord) -> Result<Self> {
        let kind = match r.discount {
            Some(discount) => ProductKind::Discounted { discount },
            None => ProductKind::Standard,
        };
        let product = Product {
            id: r.id,
            name: r.name,
            price: r.price,
            category: r.category,
            stock: r.stock,
            kind,
        };
        product.validate()?;
        Ok(product)
    }
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        let discount = p.discount();
        ProductRecord {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
            stock: p.stock,
            discount,
        }
    }
}

/// Units sold of one product at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Product the sale was recorded against. Not checked on load.
    pub product_id: String,
    /// Units sold.
    pub quantity: u32,
    /// When the sale was recorded, local time.
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    /// Unit price times quantity at the time of sale.
    pub total: f64,
}

/// `YYYY-MM-DD HH:MM:SS` (de)serialization for sale timestamps.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Format used on disk.
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Write `date` in [`FORMAT`].
    pub fn serialize<S>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(&date.format(FORMAT))
    }

    /// Parse a timestamp written in [`FORMAT`].
    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_field_selects_kind() {
        let plain: Product = serde_json::from_str(
            r#"{"id":"P1","name":"Pen","price":2.5,"category":"office","stock":4}"#,
        )
        .unwrap();
        assert_eq!(plain.kind, ProductKind::Standard);

        let special: Product = serde_json::from_str(
            r#"{"id":"P2","name":"Ink","price":10.0,"category":"office","stock":1,"discount":0.25}"#,
        )
        .unwrap();
        assert_eq!(special.discount(), Some(0.25));
        assert!((special.final_price() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn standard_product_omits_discount_on_disk() {
        let json = serde_json::to_string(&Product::new("P1", "Pen", 1.0, "office", 1)).unwrap();
        assert!(!json.contains("discount"));
        let json = serde_json::to_string(&Product::new("P1", "Pen", 1.0, "office", 1).discounted(0.1))
            .unwrap();
        assert!(json.contains("\"discount\":0.1"));
    }

    #[test]
    fn out_of_range_values_are_rejected_on_load() {
        let bad_discount = r#"{"id":"P","name":"n","price":1.0,"category":"c","stock":1,"discount":1.5}"#;
        assert!(serde_json::from_str::<Product>(bad_discount).is_err());
        let negative_stock = r#"{"id":"P","name":"n","price":1.0,"category":"c","stock":-1}"#;
        assert!(serde_json::from_str::<Product>(negative_stock).is_err());
        let negative_price = r#"{"id":"P","name":"n","price":-1.0,"category":"c","stock":1}"#;
        assert!(serde_json::from_str::<Product>(negative_price).is_err());
    }

    #[test]
    fn take_stock_never_goes_negative() {
        let mut p = Product::new("P1", "Pen", 1.0, "office", 2);
        assert!(!p.take_stock(3));
        assert_eq!(p.stock, 2);
        assert!(p.take_stock(2));
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn sale_timestamp_format() {
        let date = NaiveDateTime::parse_from_str("2024-03-05 09:07:01", timestamp::FORMAT).unwrap();
        let sale = Sale {
            product_id: "P1".into(),
            quantity: 2,
            date,
            total: 4.0,
        };
        let json = serde_json::to_string(&sale).unwrap();
        assert!(json.contains("\"date\":\"2024-03-05 09:07:01\""));
        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sale);
    }
}
