use cdr3_extract::cli;
use cdr3_extract::commands::extract::{self, ExtractOptions};
use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = ExtractOptions::from_args(args).and_then(extract::run);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
