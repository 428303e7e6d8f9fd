//! FileSystem port - abstraction over the file operations the build needs
//!
//! The builder only ever asks about existence and modification times, and
//! creates or removes directories and intermediates. Keeping that behind a
//! trait lets the decision logic run against an in-memory fake.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test fakes with scripted timestamps
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Last modification time of a path
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Create directory and parents (no error if it already exists)
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Every file below `root`, recursively, sorted by path.
    ///
    /// Unreadable entries are skipped; a missing root yields nothing.
    fn walk_files(&self, root: &Path) -> Vec<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        (**self).walk_files(root)
    }
}
