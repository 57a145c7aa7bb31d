use super::processor::RecordProcessor;
use super::stats::ProcessingStats;
use anyhow::Result;

pub trait RecordReader {
    /// Feeds every complete record to `processor` in input order, then calls
    /// `finalize` on it.
    fn read_records<P: RecordProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats>;
}
