//! Application Layer - Use Cases
//!
//! Orchestration only; decisions live in the domain layer.
//!
//! - `build` - the asset build (`AssetTreeWalker`, `AssetBuilder`)
//! - `dispatch` - run a command over a source tree (`BulkDispatcher`)

pub mod build;
pub mod dispatch;

pub use build::{AssetBuilder, AssetTreeWalker, BuildOutcome, BuildSummary};
pub use dispatch::{BulkDispatcher, DispatchOptions, DispatchReport};
