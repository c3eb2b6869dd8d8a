//! Store context provider for the catalog.
//!
//! The [`ProductStore`] lives in a `Signal` created by `App` and is handed
//! to every view through context.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = use_store();
//!
//! // Read
//! let count = store.read().products().len();
//!
//! // Mutate (re-renders every reader)
//! store.write().add_product(product);
//! ```

use catalog_core::{ProductStore, StoreConfig};
use dioxus::prelude::*;

/// Get the store configuration resolved from the command line.
pub fn get_store_config() -> StoreConfig {
    crate::get_store_config()
}

/// Build the session store from the startup config and the built-in
/// taxonomy. A broken taxonomy leaves the store usable with no types.
pub fn initial_store() -> ProductStore {
    let config = get_store_config();
    match ProductStore::with_defaults(config) {
        Ok(store) => {
            tracing::info!(
                types = store.types().len(),
                max_price = config.max_price,
                "Product store initialized"
            );
            store
        }
        Err(e) => {
            tracing::error!("Failed to load product types: {}", e);
            ProductStore::new(Vec::new(), config)
        }
    }
}

/// Hook to access the product store from context.
pub fn use_store() -> Signal<ProductStore> {
    use_context::<Signal<ProductStore>>()
}
