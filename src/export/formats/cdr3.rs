use crate::cdr3::{AcceptanceStats, HistogramBin};
use crate::sequence_processor::core::ProcessingStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cdr3Export {
    pub parameters: ExtractionParameters,
    pub statistics: ExtractionStatistics,
    pub histogram: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionParameters {
    pub input: String,
    pub output: String,
    pub preseq: String,
    pub postseq: String,
    pub min_length: usize,
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStatistics {
    pub records_read: u64,
    pub unique_cdr3s: usize,
    #[serde(flatten)]
    pub acceptance: AcceptanceStats,
    pub unpaired_trailing_header: bool,
}

impl ExtractionStatistics {
    pub fn new(reading: &ProcessingStats, acceptance: &AcceptanceStats, unique_cdr3s: usize) -> Self {
        Self {
            records_read: reading.records,
            unique_cdr3s,
            acceptance: acceptance.clone(),
            unpaired_trailing_header: reading.unpaired_header,
        }
    }
}
