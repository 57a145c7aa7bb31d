pub mod cdr3;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod sequence_processor;
pub mod utils;

// Re-export main API
pub use cdr3::*;
pub use error::Cdr3Error;
