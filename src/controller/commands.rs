use std::path::PathBuf;

use crate::common::LoadError;
use crate::market::{OrderBookSnapshots, PriceRow};

/// Resource loads the viewer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCommand {
    /// Load a price series file
    Prices(PathBuf),
    /// Load an orderbook snapshot file
    OrderBook(PathBuf),
}

impl LoadCommand {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadCommand::Prices(path) | LoadCommand::OrderBook(path) => path,
        }
    }
}

/// Completed loads sent back to the GUI
#[derive(Debug)]
pub enum LoadResponse {
    /// Price rows parsed from `path`
    Prices { path: PathBuf, rows: Vec<PriceRow> },
    /// Orderbook grouped by timestamp
    OrderBook { path: PathBuf, snapshots: OrderBookSnapshots },
    /// Load failed; prior data stays in place
    Failed { command: LoadCommand, error: LoadError },
}
