pub mod csv_reader;
pub mod data_loader;
pub mod error;

pub use csv_reader::{parse_order_book, parse_price_rows};
pub use data_loader::DataLoader;
pub use error::LoadError;
