mod paired_lines;

pub use paired_lines::PairedLineReader;
