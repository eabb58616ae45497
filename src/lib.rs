pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod parser;
pub mod state;

pub use parser::{parse, validate};
