//! Process Runner
//!
//! Implements the ToolRunner port with `std::process::Command`. Output is
//! fully captured and decoded lossily, so tools that print non-UTF-8 still
//! produce readable diagnostics.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{ToolInvocation, ToolOutput, ToolRunner};

/// Runs tools as child processes, blocking until each one exits
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput> {
        log::debug!("spawning {}", invocation.display());

        let output = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::null())
            .output()?;

        log::debug!(
            "{} exited with {:?}",
            invocation.program().display(),
            output.status.code()
        );

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_stderr_and_exit_code() {
        let invocation = ToolInvocation::new("/bin/sh")
            .arg("-c")
            .arg("echo out; echo err >&2; exit 3");

        let output = ProcessRunner::new().run(&invocation).unwrap();

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let invocation = ToolInvocation::new("/definitely/not/a/tool");
        assert!(ProcessRunner::new().run(&invocation).is_err());
    }
}
