use anyhow::Result;
use market_data_viewer::config::DataConfig;
use market_data_viewer::{init_logging, ui, VERSION};

fn main() -> Result<()> {
    init_logging();

    let config = DataConfig::from_env();
    log::info!(
        "Market Data Viewer v{} (prices: '{}', orderbook: '{}')",
        VERSION,
        config.price_data_glob,
        config.orderbook_file.display()
    );

    ui::launch_viewer(config)
}
