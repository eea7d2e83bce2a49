mod data;
mod display;
mod timing;

pub use data::*;
pub use display::*;
pub use timing::*;
