//! ToolRunner port - synchronous external process invocation
//!
//! One interface for "run this program, wait, hand back the exit code and
//! everything it printed". What a failure means is decided by the caller:
//! the asset builder aborts, the bulk dispatcher just prints it.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// A fully constructed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Split an argument vector into program and arguments.
    ///
    /// Returns `None` for an empty vector.
    pub fn from_argv<I, S>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut iter = argv.into_iter().map(Into::into);
        let program = iter.next()?;
        Some(Self {
            program: PathBuf::from(program),
            args: iter.collect(),
        })
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by arguments
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Render as a single line for logs, quoting arguments that contain spaces
    pub fn display(&self) -> String {
        self.argv()
            .iter()
            .map(|a| {
                let s = a.to_string_lossy();
                if s.is_empty() || s.contains(char::is_whitespace) {
                    format!("\"{}\"", s)
                } else {
                    s.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external tools to completion
pub trait ToolRunner {
    /// Spawn the invocation, block until it exits, capture stdout and stderr.
    ///
    /// `Err` means the process could not be started at all.
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput> {
        (**self).run(invocation)
    }
}
