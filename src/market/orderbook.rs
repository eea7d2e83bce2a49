use std::collections::HashMap;

use super::types::{DepthBook, DepthLevel, OrderBookTick, Side};

/// Orderbook ticks grouped by exact timestamp text.
///
/// Timestamps keep their first-seen order; ticks keep file order inside a group.
#[derive(Debug, Clone, Default)]
pub struct OrderBookSnapshots {
    timestamps: Vec<String>,
    groups: HashMap<String, Vec<OrderBookTick>>,
}

impl OrderBookSnapshots {
    pub fn from_ticks<I>(ticks: I) -> Self
    where
        I: IntoIterator<Item = OrderBookTick>,
    {
        let mut snapshots = Self::default();
        for tick in ticks {
            snapshots.push(tick);
        }
        snapshots
    }

    pub fn push(&mut self, tick: OrderBookTick) {
        match self.groups.get_mut(&tick.timestamp) {
            Some(group) => group.push(tick),
            None => {
                self.timestamps.push(tick.timestamp.clone());
                self.groups.insert(tick.timestamp.clone(), vec![tick]);
            }
        }
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn get(&self, timestamp: &str) -> Option<&[OrderBookTick]> {
        self.groups.get(timestamp).map(Vec::as_slice)
    }

    pub fn position(&self, timestamp: &str) -> Option<usize> {
        self.timestamps.iter().position(|ts| ts == timestamp)
    }

    /// Depth curves at `timestamp`; empty when the timestamp is unknown
    pub fn depth_at(&self, timestamp: Option<&str>) -> DepthBook {
        timestamp
            .and_then(|ts| self.get(ts))
            .map(aggregate_depth)
            .unwrap_or_default()
    }
}

/// Build cumulative depth curves from the ticks of one snapshot.
///
/// The midpoint is taken from the best priced bid and ask. A one-sided or
/// empty snapshot yields an empty book. Ticks on the wrong side of the
/// midpoint (crossed or stale quotes) and ticks without a volume are skipped.
pub fn aggregate_depth(ticks: &[OrderBookTick]) -> DepthBook {
    let mut bid_side = priced_side(ticks, Side::Bid);
    let mut ask_side = priced_side(ticks, Side::Ask);

    let best_bid = bid_side.iter().map(|(price, _)| *price).reduce(f64::max);
    let best_ask = ask_side.iter().map(|(price, _)| *price).reduce(f64::min);
    let (Some(best_bid), Some(best_ask)) = (best_bid, best_ask) else {
        return DepthBook::default();
    };
    let midpoint = (best_bid + best_ask) / 2.0;

    bid_side.sort_by(|a, b| b.0.total_cmp(&a.0));
    ask_side.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut bids = cumulate(bid_side.into_iter().filter(|(price, _)| *price <= midpoint));
    bids.reverse();
    let asks = cumulate(ask_side.into_iter().filter(|(price, _)| *price >= midpoint));

    DepthBook {
        midpoint: Some(midpoint),
        bids,
        asks,
    }
}

/// (price, volume) of the ticks on `side` that carry a price
fn priced_side(ticks: &[OrderBookTick], side: Side) -> Vec<(f64, Option<f64>)> {
    ticks
        .iter()
        .filter(|tick| tick.side == Some(side))
        .filter_map(|tick| tick.price.map(|price| (price, tick.volume)))
        .collect()
}

fn cumulate<I>(levels: I) -> Vec<DepthLevel>
where
    I: Iterator<Item = (f64, Option<f64>)>,
{
    let mut running = 0.0;
    levels
        .filter_map(|(price, volume)| volume.map(|v| (price, v)))
        .map(|(price, volume)| {
            running += volume;
            DepthLevel {
                price,
                cumulative_volume: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(ts: &str, side: &str, price: &str, volume: &str) -> OrderBookTick {
        OrderBookTick::new(ts, price, volume, side)
    }

    fn level(price: f64, cumulative_volume: f64) -> DepthLevel {
        DepthLevel {
            price,
            cumulative_volume,
        }
    }

    #[test]
    fn test_midpoint_and_profitable_side() {
        let ticks = vec![
            tick("t", "bid", "9", "5"),
            tick("t", "bid", "10", "2"),
            tick("t", "ask", "11", "3"),
            tick("t", "ask", "12", "4"),
        ];
        let book = aggregate_depth(&ticks);

        assert_eq!(book.midpoint, Some(10.5));
        assert_eq!(book.bids, vec![level(9.0, 7.0), level(10.0, 2.0)]);
        assert_eq!(book.asks, vec![level(11.0, 3.0), level(12.0, 7.0)]);
    }

    #[test]
    fn test_nearest_levels_adjacent() {
        let ticks = vec![
            tick("t", "ask", "103", "1"),
            tick("t", "bid", "98", "1"),
            tick("t", "ask", "101", "1"),
            tick("t", "bid", "99", "1"),
            tick("t", "bid", "97", "1"),
        ];
        let book = aggregate_depth(&ticks);

        let bid_prices: Vec<f64> = book.bids.iter().map(|l| l.price).collect();
        let ask_prices: Vec<f64> = book.asks.iter().map(|l| l.price).collect();
        assert_eq!(bid_prices, vec![97.0, 98.0, 99.0]);
        assert_eq!(ask_prices, vec![101.0, 103.0]);
        assert_eq!(book.total_bid_volume(), Some(3.0));
        assert_eq!(book.total_ask_volume(), Some(2.0));
    }

    #[test]
    fn test_cumulative_monotonic_away_from_midpoint() {
        let ticks = vec![
            tick("t", "bid", "10", "1.5"),
            tick("t", "bid", "9", "0.5"),
            tick("t", "bid", "8", "2"),
            tick("t", "ask", "11", "1"),
            tick("t", "ask", "13", "0.25"),
        ];
        let book = aggregate_depth(&ticks);

        // bids run toward the midpoint, so volume shrinks left to right
        for pair in book.bids.windows(2) {
            assert!(pair[0].cumulative_volume >= pair[1].cumulative_volume);
        }
        for pair in book.asks.windows(2) {
            assert!(pair[0].cumulative_volume <= pair[1].cumulative_volume);
        }
    }

    #[test]
    fn test_crossed_quotes_dropped() {
        // best bid 12 above best ask 11 -> midpoint 11.5
        let ticks = vec![
            tick("t", "bid", "12", "1"),
            tick("t", "bid", "10", "1"),
            tick("t", "ask", "11", "1"),
            tick("t", "ask", "13", "1"),
        ];
        let book = aggregate_depth(&ticks);

        assert_eq!(book.midpoint, Some(11.5));
        assert_eq!(book.bids, vec![level(10.0, 1.0)]);
        assert_eq!(book.asks, vec![level(13.0, 1.0)]);
    }

    #[test]
    fn test_one_sided_book_is_empty() {
        let ticks = vec![tick("t", "bid", "9", "1"), tick("t", "bid", "10", "1")];
        assert_eq!(aggregate_depth(&ticks), DepthBook::default());
        assert_eq!(aggregate_depth(&[]), DepthBook::default());
    }

    #[test]
    fn test_invalid_ticks_skipped() {
        let ticks = vec![
            tick("t", "bid", "oops", "1"),
            tick("t", "bid", "10", "bad"),
            tick("t", "bid", "9", "2"),
            tick("t", "mid", "10.4", "100"),
            tick("t", "ask", "11", "3"),
        ];
        let book = aggregate_depth(&ticks);

        assert_eq!(book.midpoint, Some(10.5));
        assert_eq!(book.bids, vec![level(9.0, 2.0)]);
        assert_eq!(book.asks, vec![level(11.0, 3.0)]);
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let snapshots = OrderBookSnapshots::from_ticks(vec![
            tick("b", "bid", "1", "1"),
            tick("a", "bid", "2", "1"),
            tick("b", "ask", "3", "1"),
            tick("c", "ask", "4", "1"),
        ]);

        assert_eq!(snapshots.timestamps(), ["b", "a", "c"]);
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots.position("c"), Some(2));

        let group_b = snapshots.get("b").unwrap();
        assert_eq!(group_b.len(), 2);
        assert_eq!(group_b[0].side, Some(Side::Bid));
        assert_eq!(group_b[1].side, Some(Side::Ask));
    }

    #[test]
    fn test_missing_timestamp_yields_empty_book() {
        let snapshots = OrderBookSnapshots::from_ticks(vec![
            tick("t", "bid", "10", "1"),
            tick("t", "ask", "11", "1"),
        ]);

        let book = snapshots.depth_at(Some("nope"));
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert!(snapshots.depth_at(None).is_empty());
        assert!(!snapshots.depth_at(Some("t")).is_empty());
    }
}
