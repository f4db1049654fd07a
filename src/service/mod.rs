//! Service module - Per-service mapping configuration.
//!
//! Describes which files to compare for each service, how to reach them on
//! both deployments, and which keys map to deployment specification paths.

mod config;
mod extract;

pub use config::*;
pub use extract::*;
