use chrono::Utc;
use crossbeam_channel::{unbounded, Receiver};
use eframe::egui;
use std::path::PathBuf;

use super::charts::{ChartDataAssembler, ChartRenderer};
use super::control_panel::{ControlAction, ControlPanel};
use super::stats_panel::StatsPanel;
use crate::common::DataLoader;
use crate::config::{DataConfig, CHART_HEIGHT};
use crate::controller::{LoadCommand, LoadController, LoadResponse};
use crate::market::{MarketView, OrderBookSnapshots, PriceRow, Selection};

pub struct MarketDataViewer {
    response_rx: Receiver<LoadResponse>,
    loader: LoadController,
    control_panel: ControlPanel,
    selection: Selection,
    prices: Vec<PriceRow>,
    order_book: OrderBookSnapshots,
}

impl MarketDataViewer {
    pub fn new(ctx: egui::Context, config: DataConfig) -> anyhow::Result<Self> {
        let (response_tx, response_rx) = unbounded();
        let loader = LoadController::new(response_tx)?.with_repaint(ctx);

        let files = DataLoader::load_files(&config.price_data_glob).unwrap_or_else(|e| {
            log::error!("Price file discovery failed: {:#}", e);
            Vec::new()
        });

        let mut viewer = Self {
            response_rx,
            loader,
            control_panel: ControlPanel::new(files.clone()),
            selection: Selection::default(),
            prices: Vec::new(),
            order_book: OrderBookSnapshots::default(),
        };

        if let Some(first) = files.into_iter().next() {
            viewer.select_file(first);
        }
        viewer
            .loader
            .dispatch(LoadCommand::OrderBook(config.orderbook_file));

        Ok(viewer)
    }

    fn select_file(&mut self, path: PathBuf) {
        self.selection = self.selection.with_file(path.clone());
        self.loader.dispatch(LoadCommand::Prices(path));
    }

    fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::SelectFile(path) => self.select_file(path),
            ControlAction::OpenFile(path) => {
                self.control_panel.add_file(path.clone());
                self.select_file(path);
            }
            ControlAction::SetFilter(filter) => {
                self.selection = self.selection.with_filter(filter);
            }
            ControlAction::Scrub(index) => {
                let timestamp = self.order_book.timestamps().get(index).cloned();
                self.selection = self.selection.with_scrub(index, timestamp);
            }
        }
    }

    /// Apply finished loads. Each replaces its dataset wholesale; a failure
    /// keeps whatever was loaded before.
    fn apply_response(&mut self, response: LoadResponse) {
        match response {
            LoadResponse::Prices { path, rows } => {
                if !self.selection.is_file(&path) {
                    log::debug!("Discarding stale price load for {}", path.display());
                    return;
                }
                log::info!("Loaded {} price row(s) from {}", rows.len(), path.display());
                self.prices = rows;
                self.control_panel.set_last_error(None);
            }
            LoadResponse::OrderBook { path, snapshots } => {
                log::info!(
                    "Loaded {} orderbook snapshot(s) from {}",
                    snapshots.len(),
                    path.display()
                );
                let first = snapshots.timestamps().first().cloned();
                self.order_book = snapshots;
                self.selection = self.selection.with_scrub(0, first);
            }
            LoadResponse::Failed { command, error } => {
                if let LoadCommand::Prices(path) = &command {
                    if !self.selection.is_file(path) {
                        log::debug!(
                            "Ignoring stale load failure for {}: {}",
                            path.display(),
                            error
                        );
                        return;
                    }
                }
                log::error!("Error loading {}: {}", command.path().display(), error);
                self.control_panel.set_last_error(Some(format!(
                    "Error loading {}: {}",
                    command.path().display(),
                    error
                )));
            }
        }
    }

    fn update_data(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.apply_response(response);
        }
    }

    fn render_charts(&self, ui: &mut egui::Ui, view: &MarketView) {
        let content_width = ui.available_width();
        let half_width = (content_width - 20.0) / 2.0;

        ChartRenderer::render_line_chart(
            ui,
            "price_plot",
            "Price Chart",
            &ChartDataAssembler::price_chart(view),
            view.price_range,
            content_width,
            CHART_HEIGHT,
            "No price data available to display.",
        );

        ui.add_space(20.0);

        ui.columns(2, |columns| {
            columns[0].vertical(|ui| {
                ChartRenderer::render_depth_chart(
                    ui,
                    &ChartDataAssembler::depth_chart(&view.depth),
                    half_width,
                    CHART_HEIGHT,
                );
            });
            columns[1].vertical(|ui| {
                ChartRenderer::render_line_chart(
                    ui,
                    "profit_plot",
                    "Profit Chart",
                    &ChartDataAssembler::profit_chart(view),
                    view.profit_range,
                    half_width,
                    CHART_HEIGHT,
                    "No profit data available to display.",
                );
            });
        });
    }
}

impl eframe::App for MarketDataViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_data();

        let mut actions = Vec::new();

        // Derived data is rebuilt from scratch every frame; `now` is taken once
        let view = MarketView::derive(
            &self.prices,
            &self.order_book,
            &self.selection,
            Utc::now(),
        );

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Market Data Viewer");
                ui.add_space(20.0);
                StatsPanel::render(ui, &view);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    actions.extend(ControlPanel::render_scrubber(
                        ui,
                        &self.order_book,
                        &self.selection,
                    ));
                });
            });
            ui.add_space(4.0);
            actions.extend(self.control_panel.render(ui, &self.selection));
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(20.0, 10.0))
                    .show(ui, |ui| {
                        self.render_charts(ui, &view);
                    });
            });
        });

        drop(view);
        for action in actions {
            self.apply_action(action);
        }
    }
}
