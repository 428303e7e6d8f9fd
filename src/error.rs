//! Error types for the asset builder
//!
//! Library code reports failures through `BuildError`; the binaries wrap it
//! in `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for asset builder operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for asset builder operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// A required tool directory was not provided by flag, environment or config
    #[error("{which} not defined, can't continue")]
    ToolsDirUnset { which: &'static str },

    /// The config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An external tool ran and reported failure
    #[error("building {} failed: {}", source_path.display(), describe_exit(*code))]
    ToolFailed {
        source_path: PathBuf,
        tool: PathBuf,
        code: Option<i32>,
    },

    /// An external tool could not be started at all
    #[error("failed to run {}: {message}", tool.display())]
    ToolSpawn { tool: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Configuration errors are detected before any asset is touched.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BuildError::ToolsDirUnset { .. } | BuildError::InvalidConfig { .. }
        )
    }

    /// Source file associated with this error, if any
    pub fn source_file(&self) -> Option<&std::path::Path> {
        match self {
            BuildError::ToolFailed { source_path, .. } => Some(source_path),
            BuildError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
