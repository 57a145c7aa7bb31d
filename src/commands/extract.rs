use crate::cdr3::{Aggregator, Cdr3Report, Extractor, FastaWriter};
use crate::cli::Args;
use crate::config::Config;
use crate::export::formats::cdr3::{Cdr3Export, ExtractionParameters, ExtractionStatistics};
use crate::export::{AnalysisData, AnalysisExport};
use crate::sequence_processor::collectors::Cdr3Collector;
use crate::sequence_processor::core::{ProcessingStats, RecordReader};
use crate::sequence_processor::readers::PairedLineReader;
use crate::utils::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub config: Config,
    pub summary_file: Option<PathBuf>,
    pub quiet: bool,
}

impl ExtractOptions {
    /// Layers command-line overrides on top of the config file.
    pub fn from_args(args: Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::from_path(path)?,
            None => Config::load(),
        }
        .with_overrides(args.preseq, args.postseq, args.min_length, args.max_length);
        config.validate()?;

        Ok(Self {
            input_file: args.input_file,
            output_file: args.output_file,
            config,
            summary_file: args.summary,
            quiet: args.quiet,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub report: Cdr3Report,
    pub reading: ProcessingStats,
}

impl ExtractOutcome {
    pub fn to_export(&self, options: &ExtractOptions) -> AnalysisExport {
        AnalysisExport::new(AnalysisData::Cdr3(Cdr3Export {
            parameters: ExtractionParameters {
                input: options.input_file.display().to_string(),
                output: options.output_file.display().to_string(),
                preseq: options.config.preseq.clone(),
                postseq: options.config.postseq.clone(),
                min_length: options.config.min_length,
                max_length: options.config.max_length,
            },
            statistics: ExtractionStatistics::new(
                &self.reading,
                &self.report.stats,
                self.report.unique_regions.len(),
            ),
            histogram: self.report.histogram.bins().collect(),
        }))
    }
}

/// Runs the extraction pass: reads the input, writes unique CDR3s to the
/// output file and returns the finalized report. Nothing is printed to stdout.
pub fn extract(options: &ExtractOptions) -> Result<ExtractOutcome> {
    options.config.validate()?;

    let mut reader = PairedLineReader::new(&options.input_file)?;
    let writer = FastaWriter::create(&options.output_file)?;
    let progress = ProgressBarBuilder::new("Extracting CDR3s")
        .hidden(options.quiet)
        .with_tick()
        .build()?;

    let aggregator = Aggregator::new(
        Extractor::new(options.config.anchors()),
        options.config.length_bounds(),
    );
    let mut collector = Cdr3Collector::new(aggregator, writer, progress);
    let reading = reader.read_records(&mut collector)?;
    let (report, _writer) = collector.into_report();

    if reading.unpaired_header {
        eprintln!(
            "Ignoring trailing header without a sequence line in {}",
            options.input_file.display()
        );
    }

    Ok(ExtractOutcome { report, reading })
}

pub fn run(options: ExtractOptions) -> Result<()> {
    let outcome = extract(&options)?;

    let stdout = std::io::stdout();
    outcome
        .report
        .histogram
        .write_csv(stdout.lock())
        .context("Failed to write histogram")?;

    let stats = &outcome.report.stats;
    eprintln!(
        "Processed {} records: {} unique CDR3s, {} without anchors, {} duplicates, {} out of length bounds",
        outcome.reading.records,
        stats.accepted,
        stats.no_region,
        stats.duplicate,
        stats.too_long + stats.too_short,
    );

    if let Some(summary_file) = &options.summary_file {
        outcome.to_export(&options).write_json(summary_file)?;
        eprintln!("Wrote run summary to {}", summary_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["cdr3-extract"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_args_layers_flags_over_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "preseq = \"CAR\"\nmax_length = 30\n").unwrap();

        let args = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "--max-length",
            "20",
            "-q",
            "in.txt",
            "out.fa",
        ]);
        let options = ExtractOptions::from_args(args).unwrap();

        assert_eq!(options.config.preseq, "CAR");
        assert_eq!(options.config.postseq, "WGQ");
        assert_eq!(options.config.length_bounds(), 1..=20);
        assert!(options.quiet);
        assert_eq!(options.input_file, PathBuf::from("in.txt"));
    }

    #[test]
    fn test_from_args_rejects_invalid_bounds() {
        let args = parse(&["--max-length", "18446744073709551615", "in.txt", "out.fa"]);
        assert!(ExtractOptions::from_args(args).is_err());
    }

    #[test]
    fn test_run_writes_output_and_summary() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("reads.txt");
        let output = dir.path().join("cdr3.fa");
        let summary = dir.path().join("summary.json");
        fs::write(&input, "@Read1\nAAAYYCHELLOWGQBBB\n@Read2\nAAAYYCWORLDWGQBBB\n").unwrap();

        let args = parse(&[
            "-q",
            "--summary",
            summary.to_str().unwrap(),
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        let mut options = ExtractOptions::from_args(args).unwrap();
        options.config = Config::default();
        run(options).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            ">Read1\nHELLO\n>Read2\nWORLD\n"
        );
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(value["statistics"]["unique_cdr3s"], 2);
        assert_eq!(value["histogram"].as_array().unwrap().len(), 51);
        assert_eq!(value["histogram"][5]["count"], 2);
    }
}
