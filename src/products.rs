//! Product catalogue backed by one JSON file.

use crate::error::{Error, Result};
use crate::model::{check_price, Product};
use crate::store::JsonFile;
use log::{error, info};
use std::collections::HashSet;
use std::path::Path;

/// Fields to overwrite on an existing product. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New list price.
    pub price: Option<f64>,
    /// New category.
    pub category: Option<String>,
    /// New stock count. Only touched when given.
    pub stock: Option<u32>,
}

impl ProductUpdate {
    /// `true` when nothing would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none() && self.stock.is_none()
    }

    fn apply(&self, product: &mut Product) {
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            product.name = name.to_string();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            product.category = category.to_string();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

/// Load/save and CRUD over the products file.
#[derive(Debug)]
pub struct ProductStore {
    file: JsonFile<Product>,
}

impl ProductStore {
    /// Store over `path` with pretty-printed output.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(JsonFile::open(path))
    }

    /// Store over an already configured file.
    pub fn new(file: JsonFile<Product>) -> Self {
        Self { file }
    }

    /// Path to the products file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Every product on disk. Malformed content, including two records with
    /// the same id, is an error.
    pub fn load(&self) -> Result<Vec<Product>> {
        let products = self.file.load()?;
        ensure_unique_ids(&products)?;
        Ok(products)
    }

    /// Every product on disk, or none if the file can't be parsed.
    pub fn load_or_empty(&self) -> Vec<Product> {
        match self.load() {
            Ok(products) => products,
            Err(e) => {
                error!("discarding unreadable products {}: {e}", self.path().display());
                Vec::new()
            }
        }
    }

    /// Overwrite the products file with `products`.
    pub fn save(&self, products: &[Product]) -> Result<()> {
        self.file.save(products)
    }

    /// Look up one product by id.
    pub fn get(&self, id: &str) -> Result<Product> {
        self.load()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Add a product. Fails if the id is taken or the fields are invalid.
    pub fn register(&self, product: Product) -> Result<()> {
        product.validate()?;
        self.file.modify(|products| {
            ensure_unique_ids(products)?;
            if products.iter().any(|p| p.id == product.id) {
                return Err(Error::DuplicateId(product.id.clone()));
            }
            info!("registered product {} ({})", product.id, product.name);
            products.push(product);
            Ok(())
        })
    }

    /// Overwrite the supplied fields of product `id` and return the result.
    pub fn update(&self, id: &str, changes: &ProductUpdate) -> Result<Product> {
        if let Some(price) = changes.price {
            check_price(price)?;
        }
        self.file.modify(|products| {
            ensure_unique_ids(products)?;
            let product = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            changes.apply(product);
            info!("updated product {id}");
            Ok(product.clone())
        })
    }

    /// Remove product `id` and return it.
    pub fn delete(&self, id: &str) -> Result<Product> {
        self.file.modify(|products| {
            ensure_unique_ids(products)?;
            let pos = products
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            info!("deleted product {id}");
            Ok(products.remove(pos))
        })
    }
}

/// Two records sharing an id make the file ambiguous; refuse to act on it.
fn ensure_unique_ids(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for p in products {
        if !seen.insert(p.id.as_str()) {
            return Err(Error::Deserialize(format!("duplicate product id '{}'", p.id)));
        }
    }
    Ok(())
}
