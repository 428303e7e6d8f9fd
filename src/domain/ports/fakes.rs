//! In-memory test doubles for the domain ports

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use super::{
    BuildEvent, BuildEventSink, DispatchEvent, DispatchEventSink, FileSystem, ToolInvocation,
    ToolOutput, ToolRunner,
};

#[derive(Default)]
struct MemoryFsState {
    files: HashMap<PathBuf, SystemTime>,
    dirs: HashSet<PathBuf>,
    clock: u64,
}

/// File system with scripted timestamps. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryFs {
    state: Rc<RefCell<MemoryFsState>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, modified: SystemTime) {
        let path = path.into();
        let mut state = self.state.borrow_mut();
        if let Some(parent) = path.parent() {
            for ancestor in parent.ancestors() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        state.files.insert(path, modified);
    }

    /// Write a file stamped with the fake clock, which then advances
    pub fn touch(&self, path: impl Into<PathBuf>) {
        let now = {
            let mut state = self.state.borrow_mut();
            state.clock += 1;
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 + state.clock)
        };
        self.add_file(path, now);
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().files.contains_key(path.as_ref())
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.borrow();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.borrow().dirs.contains(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.state
            .borrow()
            .files
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.state
            .borrow_mut()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .state
            .borrow()
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect();
        files.sort();
        files
    }
}

/// Tool runner that records invocations and emulates tool outputs
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<ToolInvocation>>,
    fs: Option<MemoryFs>,
    fail_program: Option<String>,
    spawn_error: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create destination files in `fs` whenever a tool succeeds
    pub fn writing_to(fs: &MemoryFs) -> Self {
        Self {
            fs: Some(fs.clone()),
            ..Self::default()
        }
    }

    /// Make every invocation of the named executable exit with code 1
    pub fn failing(mut self, executable_stem: &str) -> Self {
        self.fail_program = Some(executable_stem.to_string());
        self
    }

    /// Make every invocation fail to spawn
    pub fn unspawnable(mut self) -> Self {
        self.spawn_error = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| {
                c.program()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }

    fn emulate_outputs(&self, invocation: &ToolInvocation) {
        let Some(fs) = &self.fs else {
            return;
        };
        let args = invocation.args();
        let mut outputs = Vec::new();
        for (i, arg) in args.iter().enumerate() {
            if arg == "-imageout" || arg == "-json" || arg == "-o" {
                if let Some(next) = args.get(i + 1) {
                    outputs.push(PathBuf::from(next));
                }
            }
        }
        if outputs.is_empty() {
            if let Some(last) = args.last() {
                outputs.push(PathBuf::from(last));
            }
        }
        for output in outputs {
            fs.touch(output);
        }
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput> {
        self.calls.borrow_mut().push(invocation.clone());

        if self.spawn_error {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        let stem = invocation
            .program()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail_program.as_deref() == Some(stem.as_str()) {
            return Ok(ToolOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: format!("{}: conversion failed", stem),
            });
        }

        self.emulate_outputs(invocation);
        Ok(ToolOutput {
            code: Some(0),
            stdout: format!("{} ok", stem),
            stderr: String::new(),
        })
    }
}

/// Event sink that records everything it receives
#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<BuildEvent>>,
    pub dispatch_events: RefCell<Vec<DispatchEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn built_destinations(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                BuildEvent::UnitBuilt { destination, .. } => Some(destination.clone()),
                _ => None,
            })
            .collect()
    }
}

impl BuildEventSink for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl DispatchEventSink for RecordingSink {
    fn on_event(&self, event: DispatchEvent) {
        self.dispatch_events.borrow_mut().push(event);
    }
}
