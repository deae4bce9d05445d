use std::collections::HashSet;

use regex::Regex;
use xxhash_rust::xxh3::xxh3_64;

use crate::rules::ColumnRule;
use crate::utils::hasher::Xxh3Builder;

/// A rule to check membership in an explicit set of acceptable literals.
pub struct IsInCheck {
    name: String,
    members: HashSet<u64, Xxh3Builder>,
}

impl IsInCheck {
    pub fn new(name: String, members: Vec<String>) -> Self {
        let mut hashset = HashSet::with_hasher(Xxh3Builder);
        members.into_iter().for_each(|m| {
            let hash = xxh3_64(m.as_bytes());
            let _ = hashset.insert(hash);
        });
        Self {
            name,
            members: hashset,
        }
    }
}

impl ColumnRule for IsInCheck {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_valid(&self, value: &str) -> bool {
        self.members.contains(&xxh3_64(value.as_bytes()))
    }
}

/// A rule to check that the whole value matches a regex pattern.
///
/// The pattern is compiled fully anchored (`^(?:pat)$`), so a value with
/// trailing garbage after a prefix match is a violation.
pub struct RegexMatch {
    name: String,
    regex: Regex,
}

impl RegexMatch {
    pub fn new(name: String, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self { name, regex })
    }
}

impl ColumnRule for RegexMatch {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_valid(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}
