//! Config module - Canonical configuration model and its parser.
//!
//! Raw configuration bytes are turned into a `section -> key -> values`
//! model with filters applied up front.

mod canonical;
mod filter;
mod flat;
mod parser;

pub use canonical::*;
pub use filter::*;
pub use flat::*;
pub use parser::{parse, parse_str};
