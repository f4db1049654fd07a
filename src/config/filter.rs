//! Section and key exclusion filters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// FilterSet lists sections and keys that are excluded from comparison.
///
/// Filters are applied while parsing, so a filtered key never reaches the
/// diff engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub sections: BTreeSet<String>,
    pub keys: BTreeSet<String>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Adds section names to exclude.
    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.extend(sections.into_iter().map(Into::into));
        self
    }

    /// Adds key names to exclude.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn excludes_section(&self, section: &str) -> bool {
        self.sections.contains(section)
    }

    pub fn excludes_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns the union of both filter sets.
    pub fn union(&self, other: &FilterSet) -> FilterSet {
        FilterSet {
            sections: self.sections.union(&other.sections).cloned().collect(),
            keys: self.keys.union(&other.keys).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_keeps_both_sides() {
        let service = FilterSet::new().with_sections(["database"]).with_keys(["debug"]);
        let extra = FilterSet::new().with_keys(["transport_url", "debug"]);
        let both = service.union(&extra);
        assert!(both.excludes_section("database"));
        assert!(both.excludes_key("debug"));
        assert!(both.excludes_key("transport_url"));
        assert_eq!(both.keys.len(), 2);
        assert_eq!(service.union(&FilterSet::new()), service);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let filters: FilterSet = serde_yaml::from_str("keys: [transport_url]\n").unwrap();
        assert!(filters.sections.is_empty());
        assert!(filters.excludes_key("transport_url"));
    }
}
