#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use catalog_core::logging::LoggingBuilder;
use catalog_core::StoreConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Store configuration resolved at startup
static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

/// Get the startup store configuration (defaults if not yet resolved)
pub fn get_store_config() -> StoreConfig {
    STORE_CONFIG.get().copied().unwrap_or_default()
}

/// Catalog - product catalog management
#[derive(Parser, Debug)]
#[command(name = "catalog-desktop")]
#[command(about = "Catalog - add products, browse them, tune the max price")]
struct Args {
    /// Maximum allowed product price (overrides STORE_ADD_PRODUCT_MAX_PRICE)
    #[arg(short, long)]
    max_price: Option<f64>,

    /// Tracing filter directive, e.g. "catalog=debug"
    #[arg(short, long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log_level {
        logging = logging.with_filter(filter.clone());
    }
    if args.no_color {
        logging = logging.no_ansi();
    }
    logging.init().context("failed to initialize logging")?;

    let config = StoreConfig::resolve(args.max_price).context("invalid store configuration")?;
    let _ = STORE_CONFIG.set(config);

    tracing::info!("Starting catalog with max price {}", config.max_price);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Catalog")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);

    Ok(())
}
