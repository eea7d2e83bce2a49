pub mod commands;
pub mod load_controller;

pub use commands::{LoadCommand, LoadResponse};
pub use load_controller::LoadController;
