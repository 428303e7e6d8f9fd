//! Domain Value Objects
//!
//! Immutable value types that name things: platforms, tools and asset
//! categories.

mod category;
mod platform;
mod tool;

pub use category::{
    AssetCategory, FONT_IMAGE_EXTENSION, FONT_METADATA_EXTENSION, MODEL_EXTENSION,
    SHADER_EXTENSION, TEXTURE_EXTENSION,
};
pub use platform::HostPlatform;
pub use tool::{Tool, ToolRoot};
