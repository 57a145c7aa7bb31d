/// Result of a forward scan for an anchor motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifSearch {
    Found(usize),
    NotFound,
}

impl MotifSearch {
    /// Byte offset of the first occurrence of `motif` in `sequence`.
    pub fn first(sequence: &str, motif: &str) -> Self {
        match sequence.find(motif) {
            Some(idx) => MotifSearch::Found(idx),
            None => MotifSearch::NotFound,
        }
    }
}

/// The pair of literal motifs flanking a CDR3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub preseq: String,
    pub postseq: String,
}

impl Anchors {
    pub const DEFAULT_PRESEQ: &'static str = "YYC";
    pub const DEFAULT_POSTSEQ: &'static str = "WGQ";

    pub fn new(preseq: impl Into<String>, postseq: impl Into<String>) -> Self {
        Self {
            preseq: preseq.into(),
            postseq: postseq.into(),
        }
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRESEQ, Self::DEFAULT_POSTSEQ)
    }
}

/// Locates the region between the end of the first `preseq` and the start of
/// the first `postseq`.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    anchors: Anchors,
}

impl Extractor {
    pub fn new(anchors: Anchors) -> Self {
        Self { anchors }
    }

    /// Returns `None` when either anchor is missing.
    ///
    /// When the end anchor sits before the end of the start anchor the region
    /// is empty rather than an error; callers filter it by length.
    pub fn extract<'a>(&self, sequence: &'a str) -> Option<&'a str> {
        let start = match MotifSearch::first(sequence, &self.anchors.preseq) {
            MotifSearch::Found(idx) => idx + self.anchors.preseq.len(),
            MotifSearch::NotFound => return None,
        };
        let end = match MotifSearch::first(sequence, &self.anchors.postseq) {
            MotifSearch::Found(idx) => idx,
            MotifSearch::NotFound => return None,
        };

        if end < start {
            return Some("");
        }
        Some(&sequence[start..end])
    }
}
