use super::aggregator::OutputRecord;
use crate::error::Cdr3Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes accepted regions as two-line FASTA records.
pub struct FastaWriter<W: Write> {
    writer: W,
    path: PathBuf,
    written: u64,
}

impl FastaWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, Cdr3Error> {
        let file = File::create(path).map_err(|e| Cdr3Error::output(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            written: 0,
        }
    }

    pub fn write_record(&mut self, record: &OutputRecord) -> Result<(), Cdr3Error> {
        writeln!(self.writer, "{}", record.header)
            .and_then(|_| writeln!(self.writer, "{}", record.region))
            .map_err(|e| Cdr3Error::output(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Cdr3Error> {
        self.writer
            .flush()
            .map_err(|e| Cdr3Error::output(&self.path, e))
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
