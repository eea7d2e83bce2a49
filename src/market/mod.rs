mod orderbook;
mod projector;
mod range;
mod selection;
mod time_filter;
mod types;
mod view;

pub use orderbook::{aggregate_depth, OrderBookSnapshots};
pub use projector::project_rows;
pub use range::ValueRange;
pub use selection::Selection;
pub use time_filter::TimeFilter;
pub use types::{
    parse_number, parse_timestamp, DepthBook, DepthLevel, NumericPoint, OrderBookTick, PriceRow,
    Side,
};
pub use view::MarketView;
