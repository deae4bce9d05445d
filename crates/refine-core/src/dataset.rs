//! In-memory tabular dataset backing the validation pipeline.
//!
//! Rows are kept as raw strings exactly as read from the CSV source. All
//! checks operate on string values; nothing is coerced at load time, so a
//! value that fails a check is reported with the formatting the source used.

use std::collections::HashSet;
use std::path::Path;

use xxhash_rust::xxh3::Xxh3;

use crate::errors::RefineError;
use crate::utils::hasher::Xxh3Builder;

/// An ordered collection of records sharing one fixed column set.
///
/// Invariant: every row holds exactly one field per column. Ragged input is
/// rejected at load time as a `SourceUnavailable` error.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Load a dataset fully into memory from a headered CSV file.
    ///
    /// Any read or parse failure (missing file, ragged rows, invalid UTF-8)
    /// maps to [`RefineError::SourceUnavailable`]: the dataset is unusable
    /// and construction fails.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RefineError> {
        let mut reader = csv::Reader::from_path(path).map_err(RefineError::SourceUnavailable)?;
        let columns: Vec<String> = reader
            .headers()
            .map_err(RefineError::SourceUnavailable)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(RefineError::SourceUnavailable)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { columns, rows })
    }

    /// Write the dataset out as a headered CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), RefineError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its index, failing fast on schema mismatch.
    pub fn column_index(&self, name: &str) -> Result<usize, RefineError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| RefineError::ColumnNotFound(name.to_string()))
    }

    /// Rewrite every column name into the canonical capitalized,
    /// underscore-joined form (`hours_worked_per_week` ->
    /// `Hours_Worked_Per_Week`). Pure rename, idempotent.
    pub fn normalize_column_names(&mut self) {
        for name in &mut self.columns {
            *name = normalize_name(name);
        }
    }

    /// Keep only the rows whose flag in `keep` is true. Flags beyond the
    /// current row count are ignored; missing flags drop the row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        let mut idx = 0;
        self.rows.retain(|_| {
            let kept = keep.get(idx).copied().unwrap_or(false);
            idx += 1;
            kept
        });
    }

    /// Remove rows identical across all columns except `ignore_column`,
    /// keeping the first occurrence in original order. Returns the number of
    /// rows removed.
    ///
    /// Rows are compared by xxh3 fingerprint over their fields, the same
    /// scheme used for uniqueness tracking elsewhere in this workspace.
    pub fn drop_exact_duplicates(&mut self, ignore_column: usize) -> usize {
        let mut seen: HashSet<u64, Xxh3Builder> = HashSet::with_hasher(Xxh3Builder);
        let before = self.rows.len();
        self.rows.retain(|row| {
            let mut hasher = Xxh3::new();
            for (i, field) in row.iter().enumerate() {
                if i == ignore_column {
                    continue;
                }
                hasher.update(field.as_bytes());
                // Field separator so ("ab", "c") and ("a", "bc") differ.
                hasher.update(&[0x1f]);
            }
            seen.insert(hasher.digest())
        });
        before - self.rows.len()
    }
}

fn normalize_name(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
