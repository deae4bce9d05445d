use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefineError {
    /// The CSV source could not be read or parsed; no usable dataset exists
    /// and no further operations should be attempted.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(csv::Error),

    /// A check referenced a column missing from the dataset header.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A pattern check carried a regex that failed to compile.
    #[error("Invalid pattern for column '{column}': {source}")]
    InvalidPattern {
        column: String,
        source: regex::Error,
    },

    /// Writing the refined dataset failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error outside of CSV parsing (e.g. flushing the output file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
