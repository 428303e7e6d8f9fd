//! Build unit entity

use std::path::PathBuf;

use super::build_rule::BuildRule;
use crate::domain::value_objects::AssetCategory;

/// One source to destination conversion, created per discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUnit {
    pub category: AssetCategory,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rule: BuildRule,
}

impl BuildUnit {
    pub fn new(
        category: AssetCategory,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        rule: BuildRule,
    ) -> Self {
        Self {
            category,
            source: source.into(),
            destination: destination.into(),
            rule,
        }
    }
}
