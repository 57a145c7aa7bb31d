use super::record::Record;
use super::stats::ProcessingStats;
use anyhow::Result;

pub trait RecordProcessor {
    fn process_record(&mut self, record: &Record) -> Result<()>;
    fn update_progress(&mut self, _stats: &ProcessingStats) {}
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
