//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ignore::WalkBuilder;

use crate::domain::ports::FileSystem;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        // Plain recursive listing: no ignore files, hidden files included.
        let walker = WalkBuilder::new(root).standard_filters(false).build();

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.depth() > 0 && entry.path().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    log::warn!("skipping unreadable entry under {}: {}", root.display(), err)
                }
            }
        }
        files.sort();
        files
    }
}
