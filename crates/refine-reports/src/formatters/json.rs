use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    source: String,
    initial_rows: usize,
    final_rows: usize,
    output: String,
    checks: Vec<CheckFormatter>,
    duplicates_removed: usize,
}

#[derive(Serialize, Deserialize)]
struct CheckFormatter {
    column: String,
    rule: String,
    violation_count: usize,
    violations: Vec<String>,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            source: String::new(),
            initial_rows: 0,
            final_rows: 0,
            output: String::new(),
            checks: Vec::new(),
            duplicates_removed: 0,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&mut self, source: &str, total_rows: usize) {
        self.source = source.to_string();
        self.initial_rows = total_rows;
    }

    fn on_report(&mut self, report: &refine_core::ValidationReport) {
        self.checks = report
            .outcomes()
            .iter()
            .map(|o| CheckFormatter {
                column: o.column.clone(),
                rule: o.rule_name.clone(),
                violation_count: o.violations.len(),
                violations: o.violations.clone(),
            })
            .collect();
        self.duplicates_removed = report.duplicates_removed().unwrap_or(0);
    }

    fn on_complete(&mut self, final_rows: usize, output: &str) {
        self.final_rows = final_rows;
        self.output = output.to_string();
    }
}
