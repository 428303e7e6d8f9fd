//! Domain Entities
//!
//! - `BuildRule` - how one tool family turns a source into a destination
//! - `BuildUnit` - a single pending conversion

mod build_rule;
mod build_unit;

pub use build_rule::BuildRule;
pub use build_unit::BuildUnit;
