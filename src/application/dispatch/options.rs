//! Dispatch Options

use std::path::Path;

/// Directory name fragments that exclude a file from dispatch
pub const DEFAULT_EXCLUDED_DIRS: [&str; 6] =
    [".cache", ".idea", ".vscode", "build", "deps", "tools"];

/// Source extensions dispatched by default
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["c", "cpp", "h"];

/// Which files the bulk dispatcher hands to the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Substrings that exclude a file when found in its directory path
    pub excluded_dirs: Vec<String>,
    /// Extensions (without dot, case-sensitive) that are dispatched
    pub extensions: Vec<String>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DispatchOptions {
    /// Replace the extension filter. Leading dots are accepted and dropped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Whether a directory (relative to the walk root) is excluded.
    ///
    /// This is a plain substring test, so `tools` also excludes `devtools/`.
    pub fn is_excluded(&self, relative_dir: &Path) -> bool {
        let dir = relative_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self.excluded_dirs
            .iter()
            .any(|fragment| dir.contains(fragment.as_str()))
    }

    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want == ext))
    }
}
