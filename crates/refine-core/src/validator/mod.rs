mod validation;

pub use validation::{RECORD_ID_COLUMN, RecordValidator};
