use eframe::egui;
use egui_plot::{AxisHints, Corner, Legend, Line, Plot, PlotPoints, Points, VLine};

use super::assembler::{ChartData, DepthChartData, SeriesKind};
use crate::config::{
    ASK_COLOR, BID_COLOR, HIGHLIGHT_RADIUS, MIDPOINT_COLOR, PRICE_DECIMAL_PLACES, PROFIT_COLOR,
};
use crate::market::ValueRange;

/// Headroom above and below the data range, as a share of its span
const Y_PADDING_RATIO: f64 = 0.05;

fn rgb((r, g, b): (u8, u8, u8)) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

pub struct ChartRenderer;

impl ChartRenderer {
    pub fn series_color(kind: SeriesKind) -> egui::Color32 {
        match kind {
            SeriesKind::Bid => rgb(BID_COLOR),
            SeriesKind::Ask => rgb(ASK_COLOR),
            SeriesKind::Midpoint => rgb(MIDPOINT_COLOR),
            SeriesKind::Profit => rgb(PROFIT_COLOR),
        }
    }

    /// Line chart over the row index, x axis labelled with row times
    pub fn render_line_chart(
        ui: &mut egui::Ui,
        id: &str,
        title: &str,
        data: &ChartData,
        range: Option<ValueRange>,
        width: f32,
        height: f32,
        empty_message: &str,
    ) {
        ui.label(egui::RichText::new(title).strong().size(14.0));

        if data.is_empty() {
            ui.add_sized([width, height], egui::Label::new(empty_message));
            return;
        }

        // Grid marks between rows stay unlabelled
        let axis_data = data.clone();
        let hover_data = data.clone();
        let x_axis = AxisHints::new_x()
            .label("Time")
            .formatter(move |mark, _range| {
                axis_data.label_at(mark.value).unwrap_or_default().to_string()
            });

        let mut plot = Plot::new(id)
            .legend(Legend::default().position(Corner::LeftTop))
            .height(height)
            .width(width)
            .show_axes([true, true])
            .custom_x_axes(vec![x_axis])
            .label_formatter(move |name, value| match hover_data.label_at(value.x.round()) {
                Some(label) if !name.is_empty() => format!("{}\n{}\n{:.4}", name, label, value.y),
                Some(label) => format!("{}\n{:.4}", label, value.y),
                None => format!("{:.4}", value.y),
            });

        if let Some(range) = range {
            let pad = range.span() * Y_PADDING_RATIO;
            plot = plot.include_y(range.min - pad).include_y(range.max + pad);
        }

        plot.show(ui, |plot_ui| {
            for series in &data.series {
                let color = Self::series_color(series.kind);
                for segment in &series.segments {
                    let points: PlotPoints = segment.clone().into();
                    plot_ui.line(
                        Line::new(points)
                            .color(color)
                            .name(series.kind.label())
                            .width(1.5),
                    );
                }
            }

            if let Some(point) = data.highlight {
                plot_ui.points(
                    Points::new(vec![point])
                        .radius(HIGHLIGHT_RADIUS)
                        .color(egui::Color32::WHITE)
                        .name("Selected Point"),
                );
            }
        });
    }

    /// Filled bid/ask step curves with a dashed midpoint marker
    pub fn render_depth_chart(
        ui: &mut egui::Ui,
        data: &DepthChartData,
        width: f32,
        height: f32,
    ) {
        ui.label(egui::RichText::new("Depth Chart").strong().size(14.0));

        let Some(midpoint) = data.midpoint else {
            ui.add_sized(
                [width, height],
                egui::Label::new("No depth data available for the selected timestamp."),
            );
            return;
        };

        let bid_line: PlotPoints = data.bids.clone().into();
        let ask_line: PlotPoints = data.asks.clone().into();

        Plot::new("depth_chart")
            .legend(Legend::default().position(Corner::RightTop))
            .height(height)
            .width(width)
            .show_axes([true, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(bid_line)
                        .color(rgb(BID_COLOR))
                        .name("Bids")
                        .width(2.0)
                        .fill(0.0),
                );

                plot_ui.line(
                    Line::new(ask_line)
                        .color(rgb(ASK_COLOR))
                        .name("Asks")
                        .width(2.0)
                        .fill(0.0),
                );

                plot_ui.vline(
                    VLine::new(midpoint)
                        .color(egui::Color32::from_rgb(255, 255, 100))
                        .style(egui_plot::LineStyle::Dashed { length: 8.0 })
                        .name(format!("Mid: {:.prec$}", midpoint, prec = PRICE_DECIMAL_PLACES)),
                );
            });
    }
}
