//! Asset build use case
//!
//! Walks the category subdirectories of the assets tree and converts every
//! stale source into its packed output with the matching external tool.

mod builder;
mod fonts;
mod result;
mod walker;

pub use builder::AssetBuilder;
pub use fonts::build_font;
pub use result::{BuildOutcome, BuildSummary};
pub use walker::AssetTreeWalker;
