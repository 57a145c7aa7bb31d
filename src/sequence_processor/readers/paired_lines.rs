use crate::error::Cdr3Error;
use crate::sequence_processor::core::*;
use anyhow::Result;
use niffler::get_reader;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Reads the two-line `@header` / sequence layout. Pairing follows line parity
/// only: odd lines are headers, even lines are sequences.
pub struct PairedLineReader {
    reader: Box<dyn BufRead>,
    path: PathBuf,
}

impl PairedLineReader {
    /// Opens `path`, transparently decompressing gzip/bzip2/xz/zstd input.
    pub fn new(path: &Path) -> Result<Self, Cdr3Error> {
        let file = File::open(path).map_err(|e| Cdr3Error::input(path, e))?;
        let inner_reader: Box<dyn Read> = match get_reader(Box::new(file)) {
            Ok((inner_reader, _compression)) => inner_reader,
            // fewer bytes than a magic number: nothing to decompress
            Err(niffler::Error::FileTooShort) => {
                Box::new(File::open(path).map_err(|e| Cdr3Error::input(path, e))?)
            }
            Err(e) => return Err(Cdr3Error::input(path, e)),
        };

        Ok(Self {
            reader: Box::new(BufReader::with_capacity(1024 * 1024, inner_reader)),
            path: path.to_path_buf(),
        })
    }

    pub fn from_reader(reader: impl BufRead + 'static, label: impl Into<PathBuf>) -> Self {
        Self {
            reader: Box::new(reader),
            path: label.into(),
        }
    }

    fn next_line(&mut self, buf: &mut String) -> Result<bool, Cdr3Error> {
        buf.clear();
        let n = self
            .reader
            .read_line(buf)
            .map_err(|e| Cdr3Error::input(&self.path, e))?;
        Ok(n > 0)
    }
}

impl RecordReader for PairedLineReader {
    fn read_records<P: RecordProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();
        let mut line = String::new();
        let mut header: Option<String> = None;

        while self.next_line(&mut line)? {
            stats.lines += 1;

            if stats.lines % 2 == 1 {
                header = Some(line.trim_end().to_string());
                continue;
            }

            let record = Record {
                header: header.take().unwrap_or_default(),
                sequence: line.trim_end().to_string(),
            };
            processor.process_record(&record)?;
            stats.records += 1;

            if stats.records % 1000 == 0 {
                processor.update_progress(&stats);
            }
        }

        stats.unpaired_header = header.map_or(false, |h| !h.is_empty());
        processor.update_progress(&stats);
        processor.finalize()?;

        Ok(stats)
    }
}
