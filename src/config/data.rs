use std::env;
use std::path::PathBuf;

const DEFAULT_PRICE_DATA_GLOB: &str = "data/price_data/*.csv";
const DEFAULT_ORDERBOOK_FILE: &str = "data/orderbook_data/orderbook_data1.csv";

/// Glob pattern of the price series files offered in the file selector
pub fn get_price_data_glob() -> String {
    env::var("PRICE_DATA_GLOB").unwrap_or_else(|_| DEFAULT_PRICE_DATA_GLOB.to_string())
}

/// Orderbook snapshot file loaded once at start-up
pub fn get_orderbook_file() -> PathBuf {
    env::var("ORDERBOOK_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_ORDERBOOK_FILE))
}

/// Paths the viewer reads its data from
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub price_data_glob: String,
    pub orderbook_file: PathBuf,
}

impl DataConfig {
    pub fn from_env() -> Self {
        Self {
            price_data_glob: get_price_data_glob(),
            orderbook_file: get_orderbook_file(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            price_data_glob: DEFAULT_PRICE_DATA_GLOB.to_string(),
            orderbook_file: PathBuf::from(DEFAULT_ORDERBOOK_FILE),
        }
    }
}
