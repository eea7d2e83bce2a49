const HOUR_MS: i64 = 60 * 60 * 1000;

/// Trailing window of the "Last 24 Hours" filter in milliseconds
pub const WINDOW_24H_MS: i64 = 24 * HOUR_MS;

/// Trailing window of the "Last Week" filter in milliseconds
pub const WINDOW_WEEK_MS: i64 = 7 * 24 * HOUR_MS;

/// Trailing window of the "Last Month" filter in milliseconds
pub const WINDOW_MONTH_MS: i64 = 30 * 24 * HOUR_MS;
