//! Test environment for the asset builder binaries.
//!
//! Layout inside a temp directory:
//!
//! ```text
//! <root>/assets/                 assets root, cwd for runs
//! <root>/tools/<os>/<arch>/      glslc, msdf-atlas-gen
//! <root>/generic-tools/          meshtool, texturetool
//! <root>/tools.log               one line per fake tool invocation
//! ```

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use purpl_assets::domain::services::native_tools_dir;
use purpl_assets::HostPlatform;

use super::fixtures::{ATLAS_SCRIPT, CONVERTER_SCRIPT, FAILING_SCRIPT, GLSLC_SCRIPT};

/// Result of running a binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated assets tree with fake tools installed
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Environment with all four tools succeeding
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        };
        fs::create_dir_all(env.assets_dir()).expect("Failed to create assets dir");

        env.install_tool(&env.native_tools_dir(), "glslc", GLSLC_SCRIPT);
        env.install_tool(&env.native_tools_dir(), "msdf-atlas-gen", ATLAS_SCRIPT);
        env.install_tool(&env.generic_tools_dir(), "meshtool", CONVERTER_SCRIPT);
        env.install_tool(&env.generic_tools_dir(), "texturetool", CONVERTER_SCRIPT);
        env
    }

    /// Replace one tool with a script that exits 3
    pub fn with_failing_tool(self, name: &str) -> Self {
        let dir = match name {
            "glslc" | "msdf-atlas-gen" => self.native_tools_dir(),
            _ => self.generic_tools_dir(),
        };
        self.install_tool(&dir, name, FAILING_SCRIPT);
        self
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.path().join("assets")
    }

    pub fn out_dir(&self) -> PathBuf {
        self.assets_dir().join("out")
    }

    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.assets_dir().join(relative)
    }

    pub fn out_path(&self, relative: &str) -> PathBuf {
        self.out_dir().join(relative)
    }

    /// `<root>/tools`, found by default next to the assets directory
    pub fn repo_tools_dir(&self) -> PathBuf {
        self.root.path().join("tools")
    }

    pub fn native_tools_dir(&self) -> PathBuf {
        native_tools_dir(&self.repo_tools_dir(), &HostPlatform::current())
    }

    pub fn generic_tools_dir(&self) -> PathBuf {
        self.root.path().join("generic-tools")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("tools.log")
    }

    fn install_tool(&self, dir: &Path, name: &str, script: &str) {
        fs::create_dir_all(dir).expect("Failed to create tool dir");
        let path = dir.join(name);
        fs::write(&path, script).expect("Failed to write tool script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// Write a source asset
    pub fn write_asset(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.asset_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Push a file's modification time `secs` seconds into the future
    pub fn touch_future(&self, path: &Path, secs: u64) {
        let file = fs::File::options()
            .write(true)
            .open(path)
            .expect("Failed to open file");
        file.set_modified(SystemTime::now() + Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }

    /// Every fake tool invocation so far, one entry per line
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn command(&self, bin: &str, cwd: &Path) -> Command {
        let mut cmd = Command::new(bin);
        cmd.current_dir(cwd)
            .env("PURPL_TEST_LOG", self.log_path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("PURPL_TOOLS_DIR")
            .env_remove("PURPL_REPO_TOOLS_DIR")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `purpl-assets` from the assets directory with `-t <generic tools>`
    pub fn build(&self, args: &[&str]) -> TestResult {
        let tools = self.generic_tools_dir();
        let mut full: Vec<&str> = vec!["-t", tools.to_str().expect("utf-8 temp path")];
        full.extend_from_slice(args);
        self.run_builder(&full, &[])
    }

    /// Run `purpl-assets` with exactly the given arguments and extra env vars
    pub fn run_builder(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(env!("CARGO_BIN_EXE_purpl-assets"), &self.assets_dir());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("Failed to execute purpl-assets"))
    }

    /// Run `dofiles` from `cwd`
    pub fn dofiles(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = self.command(env!("CARGO_BIN_EXE_dofiles"), cwd);
        cmd.args(args);
        TestResult::from_output(cmd.output().expect("Failed to execute dofiles"))
    }
}
