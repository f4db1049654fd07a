//! Value module - In-memory representation of decoded YAML/JSON documents.
//!
//! Deployment specifications and control-plane resources are decoded into
//! this generic tree so they can be walked by name.

mod value;

pub use value::*;
