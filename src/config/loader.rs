//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::HostPlatform;
use crate::error::{BuildError, BuildResult};

use super::types::{BuildConfig, FileConfig, RunOptions, ToolPaths};

/// Name of the optional config file looked up in the assets root
pub const CONFIG_FILE_NAME: &str = "purpl-assets.toml";

/// Environment variable naming the generic tool root
pub const TOOLS_DIR_ENV: &str = "PURPL_TOOLS_DIR";

/// Environment variable naming the repository tool root
pub const REPO_TOOLS_DIR_ENV: &str = "PURPL_REPO_TOOLS_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Values given on the command line; `None` falls through to lower layers
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub assets_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub repo_tools_dir: Option<PathBuf>,
    pub tools_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub options: RunOptions,
}

/// Values taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub tools_dir: Option<PathBuf>,
    pub repo_tools_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset
    pub fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key| get_env(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            tools_dir: path(TOOLS_DIR_ENV),
            repo_tools_dir: path(REPO_TOOLS_DIR_ENV),
        }
    }
}

/// Load a config file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BuildResult<(FileConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: FileConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BuildError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((config.rebased(base), warnings))
}

/// Resolve the final configuration.
///
/// Priority per value: CLI flag, environment, config file, built-in default.
/// Relative paths are made absolute against `cwd`.
pub fn resolve(
    cli: CliOverrides,
    env: EnvOverrides,
    cwd: &Path,
    platform: HostPlatform,
) -> BuildResult<(BuildConfig, Vec<ConfigWarning>)> {
    let assets_root = absolutize(cwd, cli.assets_dir.unwrap_or_else(|| cwd.to_path_buf()));

    let (file, warnings) = match cli.config_file {
        Some(explicit) => load_with_warnings(&absolutize(cwd, explicit))?,
        None => {
            let default_path = assets_root.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                load_with_warnings(&default_path)?
            } else {
                (FileConfig::default(), Vec::new())
            }
        }
    };

    let output_root = cli
        .output_dir
        .or(file.output.dir)
        .map(|p| absolutize(cwd, p))
        .unwrap_or_else(|| assets_root.join("out"));

    let repo_tools_root = cli
        .repo_tools_dir
        .or(env.repo_tools_dir)
        .or(file.tools.repo_dir)
        .map(|p| absolutize(cwd, p))
        .unwrap_or_else(|| default_repo_tools_dir(&assets_root));

    let tools_root = cli
        .tools_dir
        .or(env.tools_dir)
        .or(file.tools.dir)
        .map(|p| absolutize(cwd, p))
        .ok_or(BuildError::ToolsDirUnset {
            which: "tools directory",
        })?;

    log::debug!(
        "resolved roots: assets={} output={} tools={} repo_tools={}",
        assets_root.display(),
        output_root.display(),
        tools_root.display(),
        repo_tools_root.display()
    );

    let paths = ToolPaths::new(
        assets_root,
        output_root,
        tools_root,
        repo_tools_root,
        &platform,
    );

    Ok((
        BuildConfig {
            paths,
            options: cli.options,
            platform,
        },
        warnings,
    ))
}

/// `<assets>/../tools`, joined literally so an assets root ending in `..`
/// is not shortened
fn default_repo_tools_dir(assets_root: &Path) -> PathBuf {
    assets_root.join("..").join("tools")
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["tools", "output", "dir", "repo_dir"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
