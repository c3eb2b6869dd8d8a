//! In-memory product store.
//!
//! The store is a plain value. The app owns it inside a Dioxus `Signal`
//! and hands it to views through context, so every mutation goes through
//! a signal write and re-renders its readers.

use crate::config::{validate_max_price, StoreConfig};
use crate::error::CatalogResult;
use crate::taxonomy::default_product_types;
use crate::types::{Product, ProductType};

/// Session state: the product list, the type taxonomy and the config
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
    types: Vec<ProductType>,
    config: StoreConfig,
}

impl ProductStore {
    pub fn new(types: Vec<ProductType>, config: StoreConfig) -> Self {
        Self {
            products: Vec::new(),
            types,
            config,
        }
    }

    /// Store seeded with the built-in taxonomy
    pub fn with_defaults(config: StoreConfig) -> CatalogResult<Self> {
        Ok(Self::new(default_product_types()?, config))
    }

    /// Append a product. SKUs are not required to be unique.
    pub fn add_product(&mut self, product: Product) {
        tracing::info!(
            sku = %product.sku,
            name = %product.name,
            price = product.price,
            "Product added"
        );
        self.products.push(product);
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn types(&self) -> &[ProductType] {
        &self.types
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Change the maximum allowed price from the settings view
    pub fn set_max_price(&mut self, max_price: f64) -> CatalogResult<()> {
        if let Err(e) = validate_max_price(max_price) {
            tracing::warn!("Rejected max price change: {}", e);
            return Err(e);
        }
        tracing::info!(
            old = self.config.max_price,
            new = max_price,
            "Max price updated"
        );
        self.config.max_price = max_price;
        Ok(())
    }
}
