mod constructor;
mod errors;
mod parser;
mod runner;
mod writer;

use clap::{Parser, ValueEnum};

/// Output format for the refinement report
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print the report to standard output (human-readable)
    Stdout,
    /// Print the report in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "refine",
    version,
    about = "csv-refine - validation and cleaning for census-style microdata CSVs",
    long_about = "Applies an ordered list of per-column checks (integer range, enumeration, \
                  regex pattern) to a CSV extract, removes violating rows, deduplicates the \
                  remainder and writes the refined dataset out.\n\n\
                  Example usage:\n  \
                  refine census.csv\n  \
                  refine census.csv --config schema.toml --output clean.csv --format json"
)]
struct Args {
    /// Path to the CSV file to refine
    #[arg(value_name = "FILE")]
    input: String,

    /// Path to a TOML file defining the column checks; defaults to the
    /// standard census schema
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Path for the refined CSV; defaults to <input stem>_refined.csv
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Output format for the refinement report
    #[arg(short, long, value_enum, default_value = "stdout")]
    format: OutputFormat,

    /// Canonicalize header names (capitalized, underscore-joined) before
    /// validation
    #[arg(long)]
    normalize_headers: bool,

    /// Print detailed error chains
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let debug = args.debug;

    if let Err(err) = runner::run(&args) {
        if debug {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for the full error chain");
        }
        std::process::exit(1);
    }
}
