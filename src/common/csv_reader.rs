use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::LoadError;
use crate::market::{OrderBookSnapshots, OrderBookTick, PriceRow};

const PRICE_COLUMNS: [&str; 4] = ["time", "bid", "ask", "profit"];
const ORDER_BOOK_COLUMNS: [&str; 4] = ["time", "price", "volume", "side"];

fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

/// Index of each required column in header order of `required`
fn column_indices(
    headers: &StringRecord,
    required: &[&'static str; 4],
) -> Result<[usize; 4], LoadError> {
    let mut indices = [0usize; 4];
    for (slot, column) in indices.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h == *column)
            .ok_or(LoadError::MissingColumn(*column))?;
    }
    Ok(indices)
}

/// Parse a price series file.
///
/// Rows with an empty or missing bid, ask or profit are dropped; numeric
/// validity is left to the projector. Fields are trimmed, so a
/// whitespace-only value counts as empty.
pub fn parse_price_rows(text: &str) -> Result<Vec<PriceRow>, LoadError> {
    let mut rdr = reader(text);
    let [time, bid, ask, profit] = column_indices(rdr.headers()?, &PRICE_COLUMNS)?;

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("");
        if field(bid).is_empty() || field(ask).is_empty() || field(profit).is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(PriceRow::new(field(time), field(bid), field(ask), field(profit)));
    }

    if dropped > 0 {
        log::debug!("Dropped {} incomplete price row(s)", dropped);
    }
    Ok(rows)
}

/// Parse an orderbook file and group its ticks by timestamp.
///
/// Rows too short to reach every required column are dropped; present but
/// unparseable values stay in their group as absent prices or volumes.
pub fn parse_order_book(text: &str) -> Result<OrderBookSnapshots, LoadError> {
    let mut rdr = reader(text);
    let [time, price, volume, side] = column_indices(rdr.headers()?, &ORDER_BOOK_COLUMNS)?;

    let mut ticks = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;
        match (record.get(time), record.get(price), record.get(volume), record.get(side)) {
            (Some(time), Some(price), Some(volume), Some(side)) => {
                ticks.push(OrderBookTick::new(time, price, volume, side));
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} incomplete orderbook row(s)", dropped);
    }
    Ok(OrderBookSnapshots::from_ticks(ticks))
}
