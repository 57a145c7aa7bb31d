/// Counters kept by a `RecordReader` while walking its input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub lines: u64,
    pub records: u64,
    /// Input ended on a header line with no sequence after it.
    pub unpaired_header: bool,
}
