//! CLI command implementations.

mod matches;
mod trim;

pub use matches::{find_matches, format_matches};
pub use trim::run_trim;
