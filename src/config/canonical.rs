//! Canonical `section -> key -> values` configuration model.

use indexmap::IndexMap;
use std::fmt;

/// Keys of one section, in first-seen order, each with every value it was
/// given.
pub type Section = IndexMap<String, Vec<String>>;

/// CanonicalConfig is the parsed form of an INI-style configuration file.
///
/// The empty section name holds keys that appear before any section header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalConfig {
    sections: IndexMap<String, Section>,
}

impl CanonicalConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        CanonicalConfig {
            sections: IndexMap::new(),
        }
    }

    /// Ensures `section` exists, keeping its position if already present.
    pub fn add_section(&mut self, section: &str) -> &mut Section {
        self.sections.entry(section.to_string()).or_default()
    }

    /// Appends `value` to `key` in `section`.
    pub fn push(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.add_section(section)
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    /// Returns the section map if present.
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    /// Returns the values recorded for `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&[String]> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(|v| v.as_slice())
    }

    /// Returns true if `key` is present in `section`.
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Iterates over sections in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Iterates over every `(section, key, values)` triple in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.sections.iter().flat_map(|(section, keys)| {
            keys.iter()
                .map(move |(key, values)| (section.as_str(), key.as_str(), values.as_slice()))
        })
    }

    /// Returns the number of distinct `(section, key)` pairs.
    pub fn key_count(&self) -> usize {
        self.sections.values().map(|s| s.len()).sum()
    }

    /// Returns true if no section was recorded.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Renders the configuration back to INI text.
    ///
    /// Keys outside any section come first, without a header. Parsing the
    /// output yields an equal configuration.
    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CanonicalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordered = self
            .sections
            .iter()
            .filter(|(name, _)| name.is_empty())
            .chain(self.sections.iter().filter(|(name, _)| !name.is_empty()));

        for (name, keys) in ordered {
            if !name.is_empty() {
                writeln!(f, "[{}]", name)?;
            }
            for (key, values) in keys {
                for value in values {
                    writeln!(f, "{} = {}", key, value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_values() {
        let mut config = CanonicalConfig::new();
        config.push("DEFAULT", "a", "1");
        config.push("DEFAULT", "a", "2");
        assert_eq!(config.get("DEFAULT", "a"), Some(&["1".to_string(), "2".to_string()][..]));
        assert_eq!(config.key_count(), 1);
    }

    #[test]
    fn test_entries_follow_insertion_order() {
        let mut config = CanonicalConfig::new();
        config.push("b", "z", "1");
        config.push("a", "y", "2");
        config.push("b", "x", "3");
        let keys: Vec<(&str, &str)> = config.entries().map(|(s, k, _)| (s, k)).collect();
        assert_eq!(keys, vec![("b", "z"), ("b", "x"), ("a", "y")]);
    }

    #[test]
    fn test_display_puts_sectionless_keys_first() {
        let mut config = CanonicalConfig::new();
        config.push("DEFAULT", "debug", "True");
        config.push("", "top", "1");
        config.add_section("empty");
        assert_eq!(
            config.to_ini_string(),
            "top = 1\n[DEFAULT]\ndebug = True\n[empty]\n"
        );
    }
}
