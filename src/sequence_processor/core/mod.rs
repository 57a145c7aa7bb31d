pub(crate) mod processor;
pub(crate) mod record;
pub(crate) mod stats;
mod reader;

pub use processor::RecordProcessor;
pub use reader::RecordReader;
pub use record::Record;
pub use stats::ProcessingStats;
