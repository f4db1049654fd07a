//! Resolve module - Structural field resolution on deployment specifications.
//!
//! On-host key names are translated to attribute names and looked up in a
//! decoded specification tree; the result is rendered to comparable text.

mod naming;
mod resolver;
mod spec;

pub use naming::*;
pub use resolver::*;
pub use spec::*;
