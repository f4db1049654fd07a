//! Fetch module - Raw configuration content from files, hosts and pods.
//!
//! Fetching is the only place that blocks; the diff engine receives
//! complete byte buffers.

mod pod;
mod source;

pub use pod::*;
pub use source::*;
