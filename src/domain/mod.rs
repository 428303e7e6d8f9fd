//! Domain Layer
//!
//! Pure decision logic for the asset build, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Build units and the rules that drive each tool
//! - `value_objects/` - Platforms, tools, asset categories
//! - `services/` - Command resolution, output naming, staleness
//! - `ports/` - Interface definitions for infrastructure
//!
//! All file and process access goes through `ports`, so the services can be
//! exercised against in-memory fakes.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
