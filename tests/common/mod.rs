//! Common test utilities for the CLI integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated assets tree with fake tool executables
//! - Fixtures: fake tool scripts and sample sources

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
