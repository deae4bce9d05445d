//! Check compilation.
//!
//! Converts declarative [`ColumnCheck`] entries into executable trait objects
//! for the validator. Compilation is the only point where a schema can fail
//! (a pattern that does not compile); execution itself never errors on data.

use crate::errors::RefineError;
use crate::rules::{ColumnRule, IntegerRangeCheck, IsInCheck, RegexMatch};
use crate::schema::{CheckKind, ColumnCheck};

/// An executable check: one compiled rule bound to one column name.
pub struct CompiledCheck {
    pub column: String,
    pub rule: Box<dyn ColumnRule>,
}

impl std::fmt::Debug for CompiledCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledCheck")
            .field("column", &self.column)
            .field("rule", &self.rule.name())
            .finish()
    }
}

pub fn compile_check(check: &ColumnCheck) -> Result<CompiledCheck, RefineError> {
    let rule: Box<dyn ColumnRule> = match &check.kind {
        CheckKind::IntegerRange {
            min,
            max,
            include_x,
        } => Box::new(IntegerRangeCheck::new(
            "IntegerRange".to_string(),
            *min,
            *max,
            *include_x,
        )),
        CheckKind::OneOf { values } => {
            Box::new(IsInCheck::new("IsIn".to_string(), values.clone()))
        }
        CheckKind::Pattern { pattern } => Box::new(
            RegexMatch::new("RegexMatch".to_string(), pattern).map_err(|source| {
                RefineError::InvalidPattern {
                    column: check.column.clone(),
                    source,
                }
            })?,
        ),
    };
    Ok(CompiledCheck {
        column: check.column.clone(),
        rule,
    })
}

pub fn compile_schema(checks: &[ColumnCheck]) -> Result<Vec<CompiledCheck>, RefineError> {
    checks.iter().map(compile_check).collect()
}
