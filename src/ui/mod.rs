pub mod app;
pub mod charts;
pub mod control_panel;
pub mod stats_panel;

pub use app::MarketDataViewer;

use crate::config::{DataConfig, WINDOW_HEIGHT, WINDOW_WIDTH};

pub fn launch_viewer(config: DataConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title("Market Data Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Market Data Viewer",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(eframe::egui::Visuals::dark());
            Ok(Box::new(MarketDataViewer::new(cc.egui_ctx.clone(), config)?))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}
