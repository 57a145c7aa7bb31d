use clap::Parser;
use std::path::PathBuf;

/// Extract unique CDR3 regions from paired-line antibody sequences
/// and report their length distribution on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file: alternating `@header` and sequence lines (may be gzip/bzip2/xz/zstd compressed)
    pub input_file: PathBuf,

    /// Output file for the unique CDR3s in FASTA format
    pub output_file: PathBuf,

    /// Start anchor; the CDR3 begins right after its first occurrence (default: YYC)
    #[arg(long)]
    pub preseq: Option<String>,

    /// End anchor; the CDR3 ends right before its first occurrence (default: WGQ)
    #[arg(long)]
    pub postseq: Option<String>,

    /// Shortest CDR3 to keep (default: 1)
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Longest CDR3 to keep, also the last histogram bucket (default: 50)
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Read defaults from this TOML file instead of the user config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not show the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}
