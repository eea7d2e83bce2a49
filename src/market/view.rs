use chrono::{DateTime, Utc};

use super::orderbook::OrderBookSnapshots;
use super::projector::project_rows;
use super::range::ValueRange;
use super::selection::Selection;
use super::types::{DepthBook, NumericPoint, PriceRow};

/// Everything the charts need for one frame, derived from the loaded data
/// and the current selection.
#[derive(Debug, Clone)]
pub struct MarketView<'a> {
    pub rows: Vec<&'a PriceRow>,
    pub points: Vec<NumericPoint>,
    pub price_range: Option<ValueRange>,
    pub profit_range: Option<ValueRange>,
    pub depth: DepthBook,
    pub selected_index: usize,
}

impl<'a> MarketView<'a> {
    pub fn derive(
        prices: &'a [PriceRow],
        order_book: &OrderBookSnapshots,
        selection: &Selection,
        now: DateTime<Utc>,
    ) -> Self {
        let rows = selection.filter.apply(prices, now);
        let points = project_rows(&rows);

        let price_range = ValueRange::from_options(
            points.iter().flat_map(|p| [p.bid, p.ask, p.midpoint]),
        );
        let profit_range = ValueRange::from_options(points.iter().map(|p| p.profit));

        Self {
            rows,
            points,
            price_range,
            profit_range,
            depth: order_book.depth_at(selection.timestamp.as_deref()),
            selected_index: selection.index,
        }
    }

    /// Point under the scrubber, if the filtered series reaches that far
    pub fn selected_point(&self) -> Option<&NumericPoint> {
        self.points.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{OrderBookTick, TimeFilter};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
    }

    fn prices() -> Vec<PriceRow> {
        vec![
            PriceRow::new("2023-12-01T00:00", "1.0", "2.0", "0.5"),
            PriceRow::new("2024-01-01T12:00", "1.5", "bad", "0.7"),
            PriceRow::new("2024-01-01T18:00", "2.0", "3.0", "-0.2"),
        ]
    }

    fn order_book() -> OrderBookSnapshots {
        OrderBookSnapshots::from_ticks(vec![
            OrderBookTick::new("t0", "10", "1", "bid"),
            OrderBookTick::new("t0", "11", "2", "ask"),
        ])
    }

    #[test]
    fn test_derive_all() {
        let prices = prices();
        let selection = Selection::default().with_scrub(0, Some("t0".to_string()));
        let view = MarketView::derive(&prices, &order_book(), &selection, now());

        assert_eq!(view.points.len(), 3);
        assert_eq!(view.price_range, Some(ValueRange { min: 1.0, max: 3.0 }));
        assert_eq!(view.profit_range, Some(ValueRange { min: -0.2, max: 0.7 }));
        assert_eq!(view.depth.midpoint, Some(10.5));
        assert_eq!(view.selected_point().and_then(|p| p.midpoint), Some(1.5));
    }

    #[test]
    fn test_derive_filtered_and_out_of_range_index() {
        let prices = prices();
        let selection = Selection::default()
            .with_filter(TimeFilter::Last24Hours)
            .with_scrub(5, None);
        let view = MarketView::derive(&prices, &order_book(), &selection, now());

        assert_eq!(view.rows.len(), 2);
        assert!(view.selected_point().is_none());
        assert!(view.depth.is_empty());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let prices = prices();
        let book = order_book();
        let selection = Selection::default();

        let first = MarketView::derive(&prices, &book, &selection, now());
        let second = MarketView::derive(&prices, &book, &selection, now());

        assert_eq!(first.price_range, second.price_range);
        assert_eq!(first.profit_range, second.profit_range);
        assert_eq!(first.points, second.points);
    }

    #[test]
    fn test_derive_without_data() {
        let view = MarketView::derive(
            &[],
            &OrderBookSnapshots::default(),
            &Selection::default(),
            now(),
        );

        assert!(view.points.is_empty());
        assert_eq!(view.price_range, None);
        assert_eq!(view.profit_range, None);
        assert!(view.depth.is_empty());
    }
}
