//! Catalog Core Library
//!
//! Headless logic behind the catalog front end: the product data model,
//! the in-memory store, form input validation, the searchable select
//! state machine and table formatting.
//!
//! ## Overview
//!
//! Nothing in this crate renders. The UI crate drives these types from
//! event handlers, so every behavior the user sees (clamping, error
//! messages, option filtering, price formatting) can be tested here
//! without a renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use catalog_core::{Product, ProductStore, StoreConfig};
//!
//! let mut store = ProductStore::with_defaults(StoreConfig::resolve(None)?)?;
//! let vegetables = store.types()[0].children.clone().unwrap_or_default();
//!
//! store.add_product(Product::new("carrots", "veg-1", 2.5, vegetables));
//!
//! for row in catalog_core::table::product_rows(store.products()) {
//!     println!("{}", row.cells.join(" | "));
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod select;
pub mod store;
pub mod table;
pub mod taxonomy;
pub mod types;

// Re-exports
pub use config::{StoreConfig, DEFAULT_MAX_PRICE, MAX_PRICE_ENV};
pub use error::{CatalogError, CatalogResult};
pub use form::{product_form_specs, ProductDraft, ProductFormSpecs};
pub use input::{Failure, InputKind, InputSpec, InputState, Validator};
pub use logging::LoggingBuilder;
pub use select::{OptionRow, SelectState, DEFAULT_PLACEHOLDER};
pub use store::ProductStore;
pub use table::{format_price, product_rows, TableRow, PRODUCT_COLUMNS};
pub use taxonomy::default_product_types;
pub use types::{Product, ProductType};
