//! Host platform value object
//!
//! Names the OS/architecture pair used to locate the per-platform tool
//! directory, e.g. `tools/linux/x86_64` or `tools/windows/x64`.

/// Host platform identity as the tool layout spells it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPlatform {
    os: String,
    machine: String,
}

impl HostPlatform {
    /// Build a platform from explicit OS and machine names.
    ///
    /// The OS name is lowercased; the machine name is kept as given.
    pub fn new(os: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            os: os.into().to_lowercase(),
            machine: machine.into(),
        }
    }

    /// Platform this binary was compiled for
    pub fn current() -> Self {
        Self::new(os_name(std::env::consts::OS), machine_name())
    }

    /// Lowercase OS name (`linux`, `windows`, `darwin`, ...)
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Architecture directory name. `AMD64` is the only spelling rewritten.
    pub fn normalized_arch(&self) -> String {
        self.machine.replace("AMD64", "x64")
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Executable suffix for this platform
    pub fn exe_suffix(&self) -> &'static str {
        if self.is_windows() {
            ".exe"
        } else {
            ""
        }
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.normalized_arch())
    }
}

fn os_name(os: &str) -> &str {
    match os {
        "macos" | "ios" => "darwin",
        other => other,
    }
}

// Windows reports 64-bit x86 as AMD64 and macOS reports ARM as arm64; the
// prebuilt tool directories follow those names.
fn machine_name() -> &'static str {
    match (std::env::consts::OS, std::env::consts::ARCH) {
        ("windows", "x86_64") => "AMD64",
        ("windows", "aarch64") => "ARM64",
        ("macos", "aarch64") => "arm64",
        (_, arch) => arch,
    }
}
