use crate::cdr3::{Aggregator, Cdr3Report, FastaWriter};
use crate::sequence_processor::core::{ProcessingStats, Record, RecordProcessor};
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::Write;

/// Feeds records through an `Aggregator` and streams every accepted region
/// to the output as soon as it is seen.
pub struct Cdr3Collector<W: Write> {
    aggregator: Aggregator,
    writer: FastaWriter<W>,
    progress: ProgressBar,
}

impl<W: Write> Cdr3Collector<W> {
    pub fn new(aggregator: Aggregator, writer: FastaWriter<W>, progress: ProgressBar) -> Self {
        Self {
            aggregator,
            writer,
            progress,
        }
    }

    pub fn into_report(self) -> (Cdr3Report, FastaWriter<W>) {
        (self.aggregator.finalize(), self.writer)
    }
}

impl<W: Write> RecordProcessor for Cdr3Collector<W> {
    fn process_record(&mut self, record: &Record) -> Result<()> {
        if let Ok(output) = self.aggregator.offer(record) {
            self.writer.write_record(&output)?;
        }
        Ok(())
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress.set_position(stats.records);
        self.progress.set_message(format!(
            "{} records, {} unique CDR3s",
            stats.records,
            self.aggregator.unique().len()
        ));
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.progress.finish_with_message(format!(
            "Extracted {} unique CDR3s",
            self.aggregator.unique().len()
        ));
        Ok(())
    }
}
