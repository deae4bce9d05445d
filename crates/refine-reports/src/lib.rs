pub mod formatters;
pub mod utils;

use refine_core::ValidationReport;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Sink for the findings of one refinement run.
///
/// The validator records outcomes in application order; a reporter replays
/// them after the run, so stdout output reads like the pipeline narrating
/// itself while structured formats can accumulate and render once.
pub trait Reporter {
    fn on_start(&mut self, source: &str, total_rows: usize);
    fn on_report(&mut self, report: &ValidationReport);
    fn on_complete(&mut self, final_rows: usize, output: &str);
}
