//! The record validator: owns the dataset and drives the refinement
//! pipeline.
//!
//! Checks run strictly sequentially; each application may shrink the row set
//! consumed by the next. Violating rows are a normal, reportable finding
//! resolved by removal, never an error. Only load failure and schema
//! mismatch (a check naming a column the dataset does not have) are errors.

use std::path::Path;

use crate::compiler::{CompiledCheck, compile_schema};
use crate::dataset::Dataset;
use crate::errors::RefineError;
use crate::report::{RuleOutcome, ValidationReport};
use crate::schema::standard_census_schema;

/// Column holding the record identifier used for violation reporting and
/// excluded from duplicate comparison.
pub const RECORD_ID_COLUMN: &str = "Record_Number";

#[derive(Debug)]
pub struct RecordValidator {
    dataset: Dataset,
    id_column: String,
    report: ValidationReport,
}

impl RecordValidator {
    /// Load the dataset from a CSV file and wrap it in a validator.
    ///
    /// Load failure surfaces as [`RefineError::SourceUnavailable`]; there is
    /// no validator to operate on afterwards.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RefineError> {
        Ok(Self::new(Dataset::from_path(path)?))
    }

    pub fn new(dataset: Dataset) -> Self {
        let report = ValidationReport::new(dataset.row_count());
        Self {
            dataset,
            id_column: RECORD_ID_COLUMN.to_string(),
            report,
        }
    }

    /// Use a different record-identifier column than `Record_Number`.
    pub fn with_id_column(mut self, id_column: impl Into<String>) -> Self {
        self.id_column = id_column.into();
        self
    }

    /// Canonicalize header names before validation (optional pipeline step).
    pub fn normalize_column_names(&mut self) {
        self.dataset.normalize_column_names();
    }

    /// Apply one compiled check: collect the record identifiers of violating
    /// rows, remove those rows in place, and record the outcome.
    pub fn apply(&mut self, check: &CompiledCheck) -> Result<(), RefineError> {
        let column = self.dataset.column_index(&check.column)?;
        let id_column = self.dataset.column_index(&self.id_column)?;

        let mut keep = vec![true; self.dataset.row_count()];
        let mut violations = Vec::new();
        for (i, row) in self.dataset.rows().iter().enumerate() {
            if !check.rule.is_valid(&row[column]) {
                keep[i] = false;
                violations.push(row[id_column].clone());
            }
        }

        if !violations.is_empty() {
            self.dataset.retain_rows(&keep);
        }
        log::debug!(
            "{} on '{}': {} violation(s), {} row(s) remain",
            check.rule.name(),
            check.column,
            violations.len(),
            self.dataset.row_count()
        );
        self.report.record_outcome(RuleOutcome {
            column: check.column.clone(),
            rule_name: check.rule.name(),
            violations,
        });
        Ok(())
    }

    /// Apply a list of compiled checks in declared order.
    pub fn run_checks(&mut self, checks: &[CompiledCheck]) -> Result<(), RefineError> {
        for check in checks {
            self.apply(check)?;
        }
        Ok(())
    }

    /// Apply the standard census schema in declared order.
    pub fn run_standard_checks(&mut self) -> Result<(), RefineError> {
        let checks = compile_schema(&standard_census_schema())?;
        self.run_checks(&checks)
    }

    /// Remove exact-duplicate rows (ignoring the identifier column), keeping
    /// the first occurrence. Records and returns the count removed.
    pub fn drop_exact_duplicates(&mut self) -> Result<usize, RefineError> {
        let id_column = self.dataset.column_index(&self.id_column)?;
        let removed = self.dataset.drop_exact_duplicates(id_column);
        log::debug!("deduplication removed {} row(s)", removed);
        self.report.record_duplicates(removed);
        Ok(removed)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Hand off the refined dataset and its report.
    pub fn finish(self) -> (Dataset, ValidationReport) {
        (self.dataset, self.report)
    }
}
