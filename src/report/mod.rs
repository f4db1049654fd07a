//! Report module - Line rendering of diff entries.
//!
//! Removed values render as `-key=value`, added values as `+key=value`. A
//! change renders its old values followed by its new values.

use crate::diff::DiffEntry;
use std::fmt;

/// Renders entries to `-`/`+` lines in entry order.
pub fn render(entries: &[DiffEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in entries {
        push_entry(&mut lines, entry);
    }
    lines
}

fn push_entry(lines: &mut Vec<String>, entry: &DiffEntry) {
    match entry {
        DiffEntry::Removed { key, values, .. } => push_values(lines, '-', key, values),
        DiffEntry::Added { key, values, .. } => push_values(lines, '+', key, values),
        DiffEntry::Changed { key, old, new, .. } => {
            push_values(lines, '-', key, old);
            push_values(lines, '+', key, new);
        }
    }
}

fn push_values(lines: &mut Vec<String>, sign: char, key: &str, values: &[String]) {
    for value in values {
        lines.push(format!("{}{}={}", sign, key, value));
    }
}

/// Report holds the entries of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<DiffEntry>,
}

impl Report {
    pub fn new(entries: Vec<DiffEntry>) -> Self {
        Report { entries }
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Returns true if the compared sides were equal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the `-`/`+` lines.
    pub fn lines(&self) -> Vec<String> {
        render(&self.entries)
    }

    /// Returns the `-`/`+` lines with a `[section]` header in front of every
    /// run of entries from the same named section.
    pub fn sectioned_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current: Option<&str> = None;
        for entry in &self.entries {
            let section = entry.section();
            if current != Some(section) {
                if !section.is_empty() {
                    lines.push(format!("[{}]", section));
                }
                current = Some(section);
            }
            push_entry(&mut lines, entry);
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
