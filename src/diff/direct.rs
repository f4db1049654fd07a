//! Side-by-side comparison of two canonical configurations.

use super::entry::DiffEntry;
use crate::config::{parse, CanonicalConfig, FilterSet};
use crate::error::Result;

/// Compares two canonical configurations.
///
/// Entries for keys of `left` come first, in `left` order: `Removed` when
/// the key is missing on the right, `Changed` when its value sequence
/// differs. `Added` entries for keys only in `right` follow, in `right`
/// order.
pub fn compare_configs(left: &CanonicalConfig, right: &CanonicalConfig) -> Vec<DiffEntry> {
    let mut entries = Vec::new();

    for (section, key, values) in left.entries() {
        match right.get(section, key) {
            None => entries.push(DiffEntry::removed(section, key, values.to_vec())),
            Some(other) if other != values => {
                entries.push(DiffEntry::changed(section, key, values.to_vec(), other.to_vec()))
            }
            Some(_) => {}
        }
    }

    for (section, key, values) in right.entries() {
        if !left.contains(section, key) {
            entries.push(DiffEntry::added(section, key, values.to_vec()));
        }
    }

    tracing::debug!(entries = entries.len(), "compared configurations");
    entries
}

/// Parses both sides with the same filters and compares them.
pub fn compare_ini(left: &[u8], right: &[u8], filters: &FilterSet) -> Result<Vec<DiffEntry>> {
    let left = parse(left, filters)?;
    let right = parse(right, filters)?;
    Ok(compare_configs(&left, &right))
}
