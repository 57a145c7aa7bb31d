use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Largest `max_len` a histogram accepts; longer ranges are clamped.
pub const MAX_HISTOGRAM_LENGTH: usize = 10_000;

/// Dense length histogram covering every bucket from 0 to `max_len` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthHistogram {
    counts: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub size: usize,
    pub count: u64,
}

impl LengthHistogram {
    pub fn new(max_len: usize) -> Self {
        Self {
            counts: vec![0; max_len.min(MAX_HISTOGRAM_LENGTH) + 1],
        }
    }

    pub fn from_lengths(max_len: usize, lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut hist = Self::new(max_len);
        for len in lengths {
            hist.add(len);
        }
        hist
    }

    /// Lengths past the last bucket are dropped; the aggregator never produces them.
    pub fn add(&mut self, len: usize) {
        if let Some(count) = self.counts.get_mut(len) {
            *count += 1;
        }
    }

    pub fn max_len(&self) -> usize {
        self.counts.len() - 1
    }

    pub fn count(&self, len: usize) -> u64 {
        self.counts.get(len).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(size, &count)| HistogramBin { size, count })
    }

    /// Writes the `Size,Count` table, one row per bucket in ascending order.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "Size,Count")?;
        for bin in self.bins() {
            writeln!(writer, "{},{}", bin.size, bin.count)?;
        }
        writer.flush()
    }
}
