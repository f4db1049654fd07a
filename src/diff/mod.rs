//! Diff module - Comparison of canonical configurations.
//!
//! Direct mode compares two parsed configurations side by side. Mapping
//! mode compares flat on-host values against paths resolved in a
//! deployment specification.

mod direct;
mod entry;
mod mapping;

#[cfg(test)]
mod properties_test;

pub use direct::*;
pub use entry::*;
pub use mapping::*;
