//! Diff entry type.

use std::fmt;

/// DiffEntry is one reported difference between two configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    /// Key present on the left only.
    Removed {
        section: String,
        key: String,
        values: Vec<String>,
    },
    /// Key present on the right only.
    Added {
        section: String,
        key: String,
        values: Vec<String>,
    },
    /// Key present on both sides with different values.
    Changed {
        section: String,
        key: String,
        old: Vec<String>,
        new: Vec<String>,
    },
}

impl DiffEntry {
    pub fn removed(section: impl Into<String>, key: impl Into<String>, values: Vec<String>) -> Self {
        DiffEntry::Removed {
            section: section.into(),
            key: key.into(),
            values,
        }
    }

    pub fn added(section: impl Into<String>, key: impl Into<String>, values: Vec<String>) -> Self {
        DiffEntry::Added {
            section: section.into(),
            key: key.into(),
            values,
        }
    }

    pub fn changed(
        section: impl Into<String>,
        key: impl Into<String>,
        old: Vec<String>,
        new: Vec<String>,
    ) -> Self {
        DiffEntry::Changed {
            section: section.into(),
            key: key.into(),
            old,
            new,
        }
    }

    /// Returns the section the entry belongs to.
    pub fn section(&self) -> &str {
        match self {
            DiffEntry::Removed { section, .. }
            | DiffEntry::Added { section, .. }
            | DiffEntry::Changed { section, .. } => section,
        }
    }

    /// Returns the key the entry reports on.
    pub fn key(&self) -> &str {
        match self {
            DiffEntry::Removed { key, .. }
            | DiffEntry::Added { key, .. }
            | DiffEntry::Changed { key, .. } => key,
        }
    }

    /// Returns the entry seen from the other side: added and removed swap,
    /// and the old and new values of a change swap.
    pub fn inverted(&self) -> DiffEntry {
        match self.clone() {
            DiffEntry::Removed { section, key, values } => DiffEntry::Added { section, key, values },
            DiffEntry::Added { section, key, values } => DiffEntry::Removed { section, key, values },
            DiffEntry::Changed { section, key, old, new } => DiffEntry::Changed {
                section,
                key,
                old: new,
                new: old,
            },
        }
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, section, key) = match self {
            DiffEntry::Removed { section, key, .. } => ("removed", section, key),
            DiffEntry::Added { section, key, .. } => ("added", section, key),
            DiffEntry::Changed { section, key, .. } => ("changed", section, key),
        };
        if section.is_empty() {
            write!(f, "{} {}", tag, key)
        } else {
            write!(f, "{} [{}] {}", tag, section, key)
        }
    }
}
