//! Domain Services
//!
//! Stateless decision logic: tool resolution, output naming and the
//! staleness check.

pub mod command_resolver;
pub mod output_path;
pub mod staleness;

pub use command_resolver::{native_tools_dir, CommandResolver, ResolvedTools};
pub use output_path::{font_outputs, mirror_dir, output_path_for, FontOutputs};
pub use staleness::{should_build, Freshness};
