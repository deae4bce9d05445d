use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown check '{check}' for column '{column_name}'. Supported: integer, one_of, pattern")]
    UnknownCheck { check: String, column_name: String },

    #[error("Check '{check}' for column '{column_name}' requires field '{field}'")]
    MissingField {
        check: String,
        column_name: String,
        field: String,
    },

    #[error("Configuration file contains no column")]
    EmptyConfig,
}
