//! Property tests for the staleness oracle.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use purpl_assets::domain::ports::FileSystem;
use purpl_assets::domain::services::{should_build, Freshness};

/// Two-file system with fixed timestamps
struct Snapshot {
    files: HashMap<PathBuf, SystemTime>,
}

impl Snapshot {
    fn new(source: u64, destination: Option<u64>) -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("src"), at(source));
        if let Some(dest) = destination {
            files.insert(PathBuf::from("dest"), at(dest));
        }
        Self { files }
    }
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

impl FileSystem for Snapshot {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.files
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove_file(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn walk_files(&self, _root: &Path) -> Vec<PathBuf> {
        Vec::new()
    }
}

fn decide(fs: &Snapshot, force: bool) -> bool {
    should_build(fs, Path::new("src"), Path::new("dest"), force)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a missing destination is always built.
    #[test]
    fn property_missing_destination_builds(source in 0u64..1_000_000, force: bool) {
        prop_assert!(decide(&Snapshot::new(source, None), force));
    }

    /// PROPERTY: forced rebuilds ignore timestamps.
    #[test]
    fn property_force_always_builds(source in 0u64..1_000_000, dest in 0u64..1_000_000) {
        prop_assert!(decide(&Snapshot::new(source, Some(dest)), true));
    }

    /// PROPERTY: an existing destination at least as new as its source is skipped.
    #[test]
    fn property_fresh_destination_skipped(source in 0u64..1_000_000, lag in 0u64..1_000_000) {
        let fs = Snapshot::new(source, Some(source + lag));
        prop_assert!(!decide(&fs, false));
    }

    /// PROPERTY: without force, the decision is exactly "source strictly newer".
    #[test]
    fn property_decision_matches_mtime_order(source in 0u64..1_000_000, dest in 0u64..1_000_000) {
        let fs = Snapshot::new(source, Some(dest));
        prop_assert_eq!(decide(&fs, false), source > dest);

        let freshness = Freshness::capture(&fs, Path::new("src"), Path::new("dest"));
        prop_assert!(freshness.dest_exists);
        prop_assert_eq!(freshness.newer, source > dest);
    }
}
