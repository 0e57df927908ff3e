//! Single-user inventory and sales tracker backed by flat JSON files.
//!
//! Products and sales each live in one JSON array file. Every operation loads
//! the whole file, changes it in memory and writes the whole file back; nothing
//! is cached in between.
//!
//! ```rust,no_run
//! use stockbook::{Config, Inventory, Product};
//!
//! let inv = Inventory::new(&Config::default());
//! inv.products.register(Product::new("P1", "Pen", 10.0, "office", 5)).unwrap();
//! let sale = inv.record_sale("P1", 3).unwrap();
//! assert_eq!(sale.total, 30.0);
//! ```
//!
//! **Single-process only.** Two processes on the same files will clobber each
//! other's writes.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod error;
pub mod inventory;
pub mod model;
pub mod persist;
pub mod products;
pub mod sales;
pub mod serializer;
pub mod store;

pub use config::Config;
pub use controller::Controller;
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use model::{Product, ProductKind, Sale};
pub use products::{ProductStore, ProductUpdate};
pub use sales::{SaleStore, SalesReport};
pub use store::{JsonFile, JsonFileBuilder};
