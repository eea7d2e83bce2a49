use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::path::Path;
use tokio::runtime::Runtime;

use super::commands::{LoadCommand, LoadResponse};
use crate::common::{parse_order_book, parse_price_rows, LoadError};
use crate::market::{OrderBookSnapshots, PriceRow};

/// Runs each requested load as an independent one-shot task.
///
/// Loads are never retried or cancelled; results arrive on the response
/// channel in completion order.
pub struct LoadController {
    runtime: Runtime,
    response_tx: Sender<LoadResponse>,
    repaint: Option<eframe::egui::Context>,
}

impl LoadController {
    pub fn new(response_tx: Sender<LoadResponse>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("csv-loader")
            .enable_all()
            .build()
            .context("Failed to start load runtime")?;

        Ok(Self {
            runtime,
            response_tx,
            repaint: None,
        })
    }

    /// Wake the GUI whenever a load completes
    pub fn with_repaint(mut self, ctx: eframe::egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn dispatch(&self, command: LoadCommand) {
        let tx = self.response_tx.clone();
        let repaint = self.repaint.clone();

        log::info!("Loading {}", command.path().display());

        self.runtime.spawn(async move {
            let response = run_load(command).await;
            if tx.send(response).is_err() {
                log::debug!("Viewer closed before load completed");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

async fn run_load(command: LoadCommand) -> LoadResponse {
    let result = match &command {
        LoadCommand::Prices(path) => load_prices(path)
            .await
            .map(|rows| LoadResponse::Prices { path: path.clone(), rows }),
        LoadCommand::OrderBook(path) => load_order_book(path)
            .await
            .map(|snapshots| LoadResponse::OrderBook { path: path.clone(), snapshots }),
    };
    result.unwrap_or_else(|error| LoadResponse::Failed { command, error })
}

async fn read_text(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn load_prices(path: &Path) -> Result<Vec<PriceRow>, LoadError> {
    let text = read_text(path).await?;
    tokio::task::spawn_blocking(move || parse_price_rows(&text))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

async fn load_order_book(path: &Path) -> Result<OrderBookSnapshots, LoadError> {
    let text = read_text(path).await?;
    tokio::task::spawn_blocking(move || parse_order_book(&text))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}
