pub mod common;
pub mod config;
pub mod controller;
pub mod market;
pub mod ui;

pub use common::LoadError;
pub use market::{MarketView, OrderBookSnapshots, PriceRow, Selection, TimeFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialise logging; `RUST_LOG` overrides the default `info` level
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
