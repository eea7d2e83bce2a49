use eframe::egui;

use crate::config::{
    ASK_COLOR, BID_COLOR, MIDPOINT_COLOR, PRICE_DECIMAL_PLACES, TOTAL_PROFIT_COLOR,
    VOLUME_COLOR, VOLUME_DECIMAL_PLACES,
};
use crate::market::MarketView;

/// Header readout of the values under the scrubber
pub struct StatsPanel;

impl StatsPanel {
    fn format_value(value: Option<f64>, precision: usize) -> String {
        match value {
            Some(v) => format!("{:.prec$}", v, prec = precision),
            None => "-".to_string(),
        }
    }

    pub fn render(ui: &mut egui::Ui, view: &MarketView) {
        let point = view.selected_point();

        ui.horizontal(|ui| {
            Self::render_stat(
                ui,
                "Bid:",
                point.and_then(|p| p.bid),
                PRICE_DECIMAL_PLACES,
                BID_COLOR,
            );
            Self::render_stat(
                ui,
                "Midpoint:",
                point.and_then(|p| p.midpoint),
                PRICE_DECIMAL_PLACES,
                MIDPOINT_COLOR,
            );
            Self::render_stat(
                ui,
                "Ask:",
                point.and_then(|p| p.ask),
                PRICE_DECIMAL_PLACES,
                ASK_COLOR,
            );
            Self::render_stat(
                ui,
                "Bid Volume:",
                view.depth.total_bid_volume(),
                VOLUME_DECIMAL_PLACES,
                VOLUME_COLOR,
            );
            Self::render_stat(
                ui,
                "Ask Volume:",
                view.depth.total_ask_volume(),
                VOLUME_DECIMAL_PLACES,
                VOLUME_COLOR,
            );
            Self::render_stat(
                ui,
                "Total Profit:",
                point.and_then(|p| p.profit),
                PRICE_DECIMAL_PLACES,
                TOTAL_PROFIT_COLOR,
            );
        });
    }

    fn render_stat(
        ui: &mut egui::Ui,
        label: &str,
        value: Option<f64>,
        precision: usize,
        (r, g, b): (u8, u8, u8),
    ) {
        ui.label(egui::RichText::new(label).strong());
        ui.label(
            egui::RichText::new(Self::format_value(value, precision))
                .color(egui::Color32::from_rgb(r, g, b))
                .monospace(),
        );
        ui.add_space(12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(StatsPanel::format_value(Some(1.5), 4), "1.5000");
        assert_eq!(StatsPanel::format_value(Some(12.346), 2), "12.35");
        assert_eq!(StatsPanel::format_value(None, 4), "-");
    }
}
