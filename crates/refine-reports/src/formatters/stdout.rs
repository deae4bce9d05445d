use refine_core::ValidationReport;

use crate::{Reporter, utils::numbers::group_thousands};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("csv-refine v{} - Refinement Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_loaded(&self, source: &str, total_rows: usize) {
        println!("Loading data...");
        println!(
            "  {} records loaded from {}",
            group_thousands(total_rows),
            source
        );
        println!("\nValidating...");
    }

    pub fn print_report(&self, report: &ValidationReport) {
        for outcome in report.outcomes() {
            if outcome.is_clean() {
                println!(
                    "All data values in column '{}' match the expected format",
                    outcome.column
                );
            } else {
                println!(
                    "The following records contain invalid data in column '{}':",
                    outcome.column
                );
                println!("  {}", outcome.violations.join(", "));
                println!("Dropping {} record(s) from data", outcome.violations.len());
            }
        }
        match report.duplicates_removed() {
            Some(0) | None => println!("No duplicated rows found"),
            Some(n) => println!("{} duplicated rows removed", n),
        }
    }

    pub fn print_summary(&self, final_rows: usize, output: &str) {
        println!("\nSaving refined data to {}", output);
        println!("{}", "=".repeat(self.intro_len));
        println!("Result: {} rows in refined dataset", group_thousands(final_rows));
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&mut self, source: &str, total_rows: usize) {
        let i = "=".repeat(self.intro_len);
        println!("{}", self.intro);
        println!("{}", i);
        self.print_loaded(source, total_rows);
    }

    fn on_report(&mut self, report: &ValidationReport) {
        self.print_report(report);
    }

    fn on_complete(&mut self, final_rows: usize, output: &str) {
        self.print_summary(final_rows, output);
    }
}
