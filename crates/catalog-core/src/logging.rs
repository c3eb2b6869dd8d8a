//! Logging setup.
//!
//! The app logs through `tracing`; this module installs the subscriber.
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("catalog=debug,catalog_core=debug")
//!     .init()?;
//! ```
//!
//! Filter precedence: an explicit `with_filter` directive, then `RUST_LOG`,
//! then [`DEFAULT_FILTER`]. A directive that does not parse is logged and
//! replaced by [`DEFAULT_FILTER`]; it never stops startup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{CatalogError, CatalogResult};

/// Filter used when neither a directive nor `RUST_LOG` is given
pub const DEFAULT_FILTER: &str = "info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directive (e.g., "catalog=info,catalog_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors (for piping to files).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Resolve the filter without installing anything.
    pub fn build_filter(&self) -> CatalogResult<EnvFilter> {
        match &self.env_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| CatalogError::InvalidConfig(format!("log filter {:?}: {}", directive, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Resolved filter, or [`DEFAULT_FILTER`] plus the parse error
    pub fn filter_or_default(&self) -> (EnvFilter, Option<CatalogError>) {
        match self.build_filter() {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        }
    }

    /// Install the subscriber globally. Fails if one is already set.
    pub fn init(self) -> CatalogResult<()> {
        let (filter, rejected) = self.filter_or_default();
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(self.ansi))
            .try_init()
            .map_err(|e| CatalogError::InvalidConfig(format!("logging already initialized: {}", e)))?;

        if let Some(e) = rejected {
            tracing::warn!("Using default log filter {:?}: {}", DEFAULT_FILTER, e);
        }
        Ok(())
    }
}
