pub mod integer;
pub mod string;

pub use integer::IntegerRangeCheck;
pub use string::{IsInCheck, RegexMatch};

/// A predicate bound to one column determining value validity.
///
/// Rules see raw string values exactly as read from the source. A rule never
/// fails; a value is either valid or a reportable violation resolved by row
/// removal.
pub trait ColumnRule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> String;
    /// Returns true if `value` satisfies the rule.
    fn is_valid(&self, value: &str) -> bool;
}
