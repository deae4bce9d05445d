use std::collections::HashSet;

use xxhash_rust::xxh3::xxh3_64;

use crate::rules::ColumnRule;
use crate::utils::hasher::Xxh3Builder;

/// A rule to check that a column holds integers in an optional closed range,
/// optionally permitting the sentinel `"X"` ("not applicable/not stated").
///
/// Two evaluation paths, matching the bounds supplied:
///
/// - Both bounds: the valid set is the stringified range `[min, max]`
///   (base-10, no padding) plus `"X"` when permitted. Membership is exact
///   string comparison, so `"01"` is invalid even for a range containing 1.
/// - One or neither bound: the value must be a non-empty all-digit string
///   whose parsed value satisfies whichever bounds exist. `"X"` is exempt
///   when permitted.
pub struct IntegerRangeCheck {
    name: String,
    min: Option<i64>,
    max: Option<i64>,
    include_x: bool,
    members: Option<HashSet<u64, Xxh3Builder>>,
}

impl IntegerRangeCheck {
    pub fn new(name: String, min: Option<i64>, max: Option<i64>, include_x: bool) -> Self {
        // The member set is only built when both bounds are known; ranges are
        // expected to be small category codes.
        let members = match (min, max) {
            (Some(lo), Some(hi)) => {
                let mut set = HashSet::with_hasher(Xxh3Builder);
                for v in lo..=hi {
                    set.insert(xxh3_64(v.to_string().as_bytes()));
                }
                if include_x {
                    set.insert(xxh3_64(b"X"));
                }
                Some(set)
            }
            _ => None,
        };
        Self {
            name,
            min,
            max,
            include_x,
            members,
        }
    }
}

impl ColumnRule for IntegerRangeCheck {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_valid(&self, value: &str) -> bool {
        if let Some(members) = &self.members {
            return members.contains(&xxh3_64(value.as_bytes()));
        }
        if self.include_x && value == "X" {
            return true;
        }
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        // Digit strings too large for i64 are out of any supported range.
        let Ok(parsed) = value.parse::<i64>() else {
            return false;
        };
        if let Some(min) = self.min {
            if parsed < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if parsed > max {
                return false;
            }
        }
        true
    }
}
