use eframe::egui;
use std::path::{Path, PathBuf};

use crate::market::{OrderBookSnapshots, Selection, TimeFilter};

/// User requests raised by the control panel for the viewer to apply
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    SelectFile(PathBuf),
    OpenFile(PathBuf),
    SetFilter(TimeFilter),
    Scrub(usize),
}

/// File selection, time filter buttons and the timestamp scrubber
pub struct ControlPanel {
    file_paths: Vec<PathBuf>,
    last_error: Option<String>,
}

impl ControlPanel {
    pub fn new(file_paths: Vec<PathBuf>) -> Self {
        Self {
            file_paths,
            last_error: None,
        }
    }

    /// Add a hand-picked file to the selector unless it is already listed
    pub fn add_file(&mut self, path: PathBuf) {
        if !self.file_paths.contains(&path) {
            self.file_paths.push(path);
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_last_error(&mut self, error: Option<String>) {
        self.last_error = error;
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    fn pick_file() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("CSV Data Files", &["csv"])
            .add_filter("All Files", &["*"])
            .set_title("Select Price Data File")
            .pick_file()
    }

    /// Draw the file and filter row; returns at most one action per frame
    pub fn render(&mut self, ui: &mut egui::Ui, selection: &Selection) -> Option<ControlAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label("Select Data File:");

            let selected_text = selection
                .file
                .as_deref()
                .map(Self::display_name)
                .unwrap_or_else(|| "No file selected".to_string());

            egui::ComboBox::from_id_salt("price_file")
                .selected_text(selected_text)
                .width(360.0)
                .show_ui(ui, |ui| {
                    for path in &self.file_paths {
                        let is_selected = selection.is_file(path);
                        if ui
                            .selectable_label(is_selected, Self::display_name(path))
                            .clicked()
                            && !is_selected
                        {
                            action = Some(ControlAction::SelectFile(path.clone()));
                        }
                    }
                });

            if ui.button("📂 Open...").clicked() {
                if let Some(path) = Self::pick_file() {
                    action = Some(ControlAction::OpenFile(path));
                }
            }

            ui.add_space(20.0);

            for filter in TimeFilter::ALL {
                if ui
                    .selectable_label(selection.filter == filter, filter.label())
                    .clicked()
                    && selection.filter != filter
                {
                    action = Some(ControlAction::SetFilter(filter));
                }
            }
        });

        if let Some(error) = &self.last_error {
            ui.label(
                egui::RichText::new(format!("⚠ {}", error))
                    .small()
                    .color(egui::Color32::GOLD),
            );
        }

        action
    }

    /// Slider over the orderbook timestamps with the current one below it
    pub fn render_scrubber(
        ui: &mut egui::Ui,
        order_book: &OrderBookSnapshots,
        selection: &Selection,
    ) -> Option<ControlAction> {
        if order_book.is_empty() {
            return None;
        }

        let mut action = None;
        let max = order_book.len() - 1;
        let mut position = selection
            .timestamp
            .as_deref()
            .and_then(|ts| order_book.position(ts))
            .unwrap_or(0);

        ui.vertical(|ui| {
            ui.spacing_mut().slider_width = 280.0;
            if ui
                .add(egui::Slider::new(&mut position, 0..=max).show_value(false))
                .changed()
            {
                action = Some(ControlAction::Scrub(position));
            }
            ui.label(
                egui::RichText::new(selection.timestamp.as_deref().unwrap_or("-")).monospace(),
            );
        });

        action
    }
}
