//! Declarative check definitions.
//!
//! A schema is a plain list of `(column, kind, parameters)` entries applied
//! in order, so the standard census schema below is data rather than code and
//! user-supplied schemas can be parsed from configuration.

/// Check kind enum representing all supported per-column checks.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    /// Integer in an optional closed range, optionally permitting `"X"`.
    IntegerRange {
        min: Option<i64>,
        max: Option<i64>,
        include_x: bool,
    },
    /// Exact membership in a fixed set of literals.
    OneOf { values: Vec<String> },
    /// Full match against a regex pattern.
    Pattern { pattern: String },
}

/// One declarative check bound to one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCheck {
    pub column: String,
    pub kind: CheckKind,
}

impl ColumnCheck {
    pub fn integer(column: &str, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            column: column.to_string(),
            kind: CheckKind::IntegerRange {
                min,
                max,
                include_x: false,
            },
        }
    }

    pub fn integer_with_x(column: &str, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            column: column.to_string(),
            kind: CheckKind::IntegerRange {
                min,
                max,
                include_x: true,
            },
        }
    }

    pub fn one_of(column: &str, values: &[&str]) -> Self {
        Self {
            column: column.to_string(),
            kind: CheckKind::OneOf {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        }
    }

    pub fn pattern(column: &str, pattern: &str) -> Self {
        Self {
            column: column.to_string(),
            kind: CheckKind::Pattern {
                pattern: pattern.to_string(),
            },
        }
    }
}

/// The standard census microdata schema, in application order.
///
/// Later checks operate on the row set already filtered by earlier ones;
/// there is no cross-column validation.
pub fn standard_census_schema() -> Vec<ColumnCheck> {
    vec![
        ColumnCheck::integer("Record_Number", Some(1), None),
        ColumnCheck::pattern("Region", r"^[A-Za-z]\d{8}$"),
        ColumnCheck::one_of("Residence_Type", &["P", "C"]),
        ColumnCheck::integer_with_x("Family_Composition", Some(0), Some(5)),
        ColumnCheck::integer("Sex", Some(1), Some(2)),
        ColumnCheck::integer("Age", Some(1), Some(8)),
        ColumnCheck::integer("Marital_Status", Some(1), Some(5)),
        ColumnCheck::integer("Student", Some(1), Some(2)),
        ColumnCheck::integer("Country_Of_Birth", Some(1), Some(2)),
        ColumnCheck::integer("Health", Some(1), Some(5)),
        ColumnCheck::integer("Ethnic_Group", Some(1), Some(6)),
        ColumnCheck::integer("Religion", Some(1), Some(9)),
        ColumnCheck::integer_with_x("Economic_Activity", Some(1), Some(9)),
        ColumnCheck::integer_with_x("Occupation", Some(1), Some(9)),
        ColumnCheck::integer_with_x("Industry", Some(1), Some(13)),
        ColumnCheck::integer_with_x("Hours_Worked_Per_Week", Some(1), Some(4)),
        ColumnCheck::integer_with_x("Approximate_Social_Grade", Some(1), Some(4)),
    ]
}
