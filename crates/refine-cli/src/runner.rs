use std::path::Path;

use anyhow::{Context, Result};
use refine_core::{RecordValidator, compile_schema, standard_census_schema};
use refine_reports::{JsonFormatter, Reporter, StdOutFormatter};

use crate::constructor::construct_schema;
use crate::parser::parse_config;
use crate::writer::resolve_output_path;
use crate::{Args, OutputFormat};

pub fn run(args: &Args) -> Result<()> {
    let schema = match &args.config {
        Some(path) => {
            let config = parse_config(path)?;
            construct_schema(&config)
                .with_context(|| format!("Invalid schema in config file: {}", path))?
        }
        None => standard_census_schema(),
    };
    let checks = compile_schema(&schema).context("Failed to compile column checks")?;

    let mut validator = RecordValidator::from_path(&args.input)
        .with_context(|| format!("Failed to load dataset: {}", args.input))?;
    if args.normalize_headers {
        validator.normalize_column_names();
    }

    validator
        .run_checks(&checks)
        .context("Dataset does not match the configured schema")?;
    validator
        .drop_exact_duplicates()
        .context("Dataset has no record identifier column")?;

    let (dataset, report) = validator.finish();
    let output = resolve_output_path(Path::new(&args.input), args.output.as_deref());
    dataset
        .write_csv(&output)
        .with_context(|| format!("Failed to write refined dataset: {}", output.display()))?;

    let version = env!("CARGO_PKG_VERSION");
    let output_display = output.display().to_string();
    match args.format {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version.to_string());
            formatter.on_start(&args.input, report.initial_rows());
            formatter.on_report(&report);
            formatter.on_complete(dataset.row_count(), &output_display);
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version.to_string());
            formatter.on_start(&args.input, report.initial_rows());
            formatter.on_report(&report);
            formatter.on_complete(dataset.row_count(), &output_display);
            println!(
                "{}",
                formatter.to_json().context("Failed to render JSON report")?
            );
        }
    }

    Ok(())
}
