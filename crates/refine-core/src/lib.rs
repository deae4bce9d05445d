pub mod compiler;
pub mod dataset;
pub mod errors;
pub mod report;
pub mod rules;
pub mod schema;
pub mod utils;
pub mod validator;

pub use compiler::{CompiledCheck, compile_check, compile_schema};
pub use dataset::Dataset;
pub use errors::RefineError;
pub use report::{RuleOutcome, ValidationReport};
pub use schema::{CheckKind, ColumnCheck, standard_census_schema};
pub use validator::{RECORD_ID_COLUMN, RecordValidator};
