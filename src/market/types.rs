use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Offset-less layouts accepted for the `time` column, interpreted as UTC
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp column value.
///
/// Accepts RFC 3339, offset-less date-times (as UTC), bare dates (midnight UTC)
/// and integer epoch milliseconds. Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Parse a numeric column value; non-numeric and non-finite text is absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One accepted row of a price series file.
///
/// Numeric fields stay as text until projection; the reader only guarantees
/// they are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub time: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub bid: String,
    pub ask: String,
    pub profit: String,
}

impl PriceRow {
    pub fn new(time: &str, bid: &str, ask: &str, profit: &str) -> Self {
        Self {
            time: time.to_string(),
            timestamp: parse_timestamp(time),
            bid: bid.to_string(),
            ask: ask.to_string(),
            profit: profit.to_string(),
        }
    }

    /// Axis label in `M/D/YYYY H:00` form, falling back to the raw text
    pub fn label(&self) -> String {
        match self.timestamp {
            Some(ts) => format!("{} {}:00", ts.format("%-m/%-d/%Y"), ts.format("%-H")),
            None => self.time.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericPoint {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub midpoint: Option<f64>,
    pub profit: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "bid" => Some(Side::Bid),
            "ask" => Some(Side::Ask),
            _ => None,
        }
    }
}

/// Raw orderbook row. A tick with an unknown side stays in its timestamp
/// group but belongs to neither side.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBookTick {
    pub timestamp: String,
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub side: Option<Side>,
}

impl OrderBookTick {
    pub fn new(timestamp: &str, price: &str, volume: &str, side: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            price: parse_number(price),
            volume: parse_number(volume),
            side: Side::parse(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLevel {
    pub price: f64,
    pub cumulative_volume: f64,
}

/// Depth curves at one timestamp.
///
/// `bids` ends with the level nearest the midpoint, `asks` starts with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepthBook {
    pub midpoint: Option<f64>,
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
}

impl DepthBook {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Cumulative volume of the whole retained bid side
    pub fn total_bid_volume(&self) -> Option<f64> {
        self.bids.first().map(|level| level.cumulative_volume)
    }

    /// Cumulative volume of the whole retained ask side
    pub fn total_ask_volume(&self) -> Option<f64> {
        self.asks.last().map(|level| level.cumulative_volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(parse_timestamp("2024-01-01T00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01 00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T00:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01"), Some(expected));
        assert_eq!(parse_timestamp("1704067200000"), Some(expected));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1.25"), Some(1.25));
        assert_eq!(parse_number(" 3 "), Some(3.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_row_label() {
        let row = PriceRow::new("2024-03-05T14:30:00Z", "1", "2", "0");
        assert_eq!(row.label(), "3/5/2024 14:00");

        let row = PriceRow::new("not a time", "1", "2", "0");
        assert_eq!(row.label(), "not a time");
    }

    #[test]
    fn test_side_parse() {
        assert_eq!(Side::parse("bid"), Some(Side::Bid));
        assert_eq!(Side::parse("ask"), Some(Side::Ask));
        assert_eq!(Side::parse("BID"), None);
    }
}
