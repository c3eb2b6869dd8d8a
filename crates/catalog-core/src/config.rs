//! Store configuration.
//!
//! The maximum product price comes from, in order of precedence:
//! 1. the `--max-price` command line flag
//! 2. the `STORE_ADD_PRODUCT_MAX_PRICE` environment variable at runtime
//! 3. the same variable captured at build time
//! 4. [`DEFAULT_MAX_PRICE`]

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Environment variable holding the maximum allowed product price
pub const MAX_PRICE_ENV: &str = "STORE_ADD_PRODUCT_MAX_PRICE";

/// Maximum price used when nothing else is configured
pub const DEFAULT_MAX_PRICE: f64 = 100_000.0;

/// Build-time value of [`MAX_PRICE_ENV`], if it was set when compiling
const BUILD_MAX_PRICE: Option<&str> = option_env!("STORE_ADD_PRODUCT_MAX_PRICE");

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Upper bound for product prices; price inputs clamp to it
    pub max_price: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl StoreConfig {
    /// Create a config, rejecting unusable prices
    pub fn new(max_price: f64) -> CatalogResult<Self> {
        validate_max_price(max_price)?;
        Ok(Self { max_price })
    }

    /// Resolve the config from the flag, the process environment and the
    /// build environment.
    pub fn resolve(cli_max_price: Option<f64>) -> CatalogResult<Self> {
        let runtime = std::env::var(MAX_PRICE_ENV).ok();
        Self::resolve_from(cli_max_price, runtime.as_deref(), BUILD_MAX_PRICE)
    }

    /// Resolution with every source passed in explicitly
    pub fn resolve_from(
        cli_max_price: Option<f64>,
        runtime_env: Option<&str>,
        build_env: Option<&str>,
    ) -> CatalogResult<Self> {
        if let Some(price) = cli_max_price {
            tracing::debug!(price, "Max price from command line");
            return Self::new(price);
        }

        for (source, raw) in [("runtime", runtime_env), ("build", build_env)] {
            if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
                let price = parse_max_price(raw)?;
                tracing::debug!(price, source, "Max price from {}", MAX_PRICE_ENV);
                return Self::new(price);
            }
        }

        Ok(Self::default())
    }
}

/// Parse a max price as found in the environment
pub fn parse_max_price(raw: &str) -> CatalogResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        CatalogError::InvalidConfig(format!("{} is not a number: {:?}", MAX_PRICE_ENV, raw))
    })
}

pub(crate) fn validate_max_price(price: f64) -> CatalogResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CatalogError::InvalidConfig(format!(
            "max price must be a positive number, got {}",
            price
        )));
    }
    Ok(())
}
