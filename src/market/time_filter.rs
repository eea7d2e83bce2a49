use chrono::{DateTime, Duration, Utc};

use super::types::PriceRow;
use crate::config::{WINDOW_24H_MS, WINDOW_MONTH_MS, WINDOW_WEEK_MS};

/// Trailing window applied to the price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Last24Hours,
    LastWeek,
    LastMonth,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::Last24Hours,
        TimeFilter::LastWeek,
        TimeFilter::LastMonth,
        TimeFilter::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::Last24Hours => "Last 24 Hours",
            TimeFilter::LastWeek => "Last Week",
            TimeFilter::LastMonth => "Last Month",
            TimeFilter::All => "All Data",
        }
    }

    /// Window length, `None` for the unbounded filter
    pub fn window(&self) -> Option<Duration> {
        let millis = match self {
            TimeFilter::All => return None,
            TimeFilter::Last24Hours => WINDOW_24H_MS,
            TimeFilter::LastWeek => WINDOW_WEEK_MS,
            TimeFilter::LastMonth => WINDOW_MONTH_MS,
        };
        Some(Duration::milliseconds(millis))
    }

    /// Whether a row timestamp falls in `now - window ..= now`.
    /// Unparseable timestamps are never inside a bounded window.
    pub fn contains(&self, timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let Some(window) = self.window() else {
            return true;
        };
        match timestamp {
            Some(ts) => ts <= now && now - ts <= window,
            None => false,
        }
    }

    /// Keep the rows inside the window, in input order.
    ///
    /// `now` is captured once by the caller so every row is judged against
    /// the same instant.
    pub fn apply<'a>(&self, rows: &'a [PriceRow], now: DateTime<Utc>) -> Vec<&'a PriceRow> {
        rows.iter()
            .filter(|row| self.contains(row.timestamp, now))
            .collect()
    }
}
