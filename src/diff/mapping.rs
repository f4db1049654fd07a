//! Comparison of flat on-host values against a deployment specification.

use super::entry::DiffEntry;
use crate::error::{Error, Result};
use crate::resolve::{render_resolved, resolve, DeploymentSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// MappingSpec maps on-host flat keys to specification paths.
///
/// Iteration follows insertion (or YAML document) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSpec {
    entries: IndexMap<String, String>,
}

impl MappingSpec {
    pub fn new() -> Self {
        MappingSpec::default()
    }

    /// Adds a mapping from `source_key` to `target_path`.
    ///
    /// # Panics
    ///
    /// Panics if either side is empty.
    pub fn insert(&mut self, source_key: impl Into<String>, target_path: impl Into<String>) {
        let source_key = source_key.into();
        let target_path = target_path.into();
        assert!(!source_key.is_empty(), "mapping source key must not be empty");
        assert!(
            !target_path.is_empty(),
            "mapping target path for {source_key:?} must not be empty"
        );
        self.entries.insert(source_key, target_path);
    }

    /// Checks loaded data for empty source keys or target paths.
    pub fn validate(&self) -> Result<()> {
        for (source, target) in &self.entries {
            if source.is_empty() {
                return Err(Error::InvalidMapping(format!(
                    "empty source key mapped to {target:?}"
                )));
            }
            if target.is_empty() {
                return Err(Error::InvalidMapping(format!(
                    "empty target path for {source:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, source_key: &str) -> Option<&str> {
        self.entries.get(source_key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MappingSpec
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = MappingSpec::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Compares on-host flat values with the values the specification resolves
/// for each mapped path.
///
/// A missing source key compares as the empty string, as does a path that
/// does not resolve. Every mismatch yields a `Removed` entry for the source
/// key followed by an `Added` entry for the target path, in mapping order.
pub fn compare_mapping(
    source: &IndexMap<String, String>,
    mapping: &MappingSpec,
    spec: &DeploymentSpec,
) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    for (source_key, target_path) in mapping.iter() {
        let expected = source.get(source_key).map(String::as_str).unwrap_or_default();
        let actual = render_resolved(resolve(spec, target_path));
        if expected != actual {
            entries.push(DiffEntry::removed("", source_key, vec![expected.to_string()]));
            entries.push(DiffEntry::added("", target_path, vec![actual]));
        }
    }
    tracing::debug!(
        mappings = mapping.len(),
        mismatches = entries.len() / 2,
        "compared mapped values"
    );
    entries
}
