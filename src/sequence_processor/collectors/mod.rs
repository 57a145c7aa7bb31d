pub mod cdr3;

pub use cdr3::Cdr3Collector;
