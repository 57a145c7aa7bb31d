//! CDR3 extraction: anchor search, the acceptance policy with its uniqueness
//! set, and the length histogram reported at the end of a run.

pub mod aggregator;
pub mod extractor;
pub mod histogram;
pub mod writer;

pub use aggregator::{
    AcceptanceStats, Aggregator, Cdr3Report, OutputRecord, Rejection, UniquenessSet,
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
pub use extractor::{Anchors, Extractor, MotifSearch};
pub use histogram::{HistogramBin, LengthHistogram, MAX_HISTOGRAM_LENGTH};
pub use writer::FastaWriter;
