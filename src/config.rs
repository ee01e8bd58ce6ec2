//! Configuration for where appdex reads its content data.
//!
//! Configuration sources (highest priority first):
//! 1. `--data` on the command line (handled by the CLI)
//! 2. Environment variable (APPDEX_DATA)
//! 3. Config file (.appdex/config.yaml, then the user config directory)
//! 4. Defaults (the data bundled into the binary)
//!
//! Config file discovery:
//! - Searches the current directory and parents for .appdex/config.yaml
//! - Falls back to <user config dir>/appdex/config.yaml
//! - `data.dir` in a project config is relative to the directory holding `.appdex/`

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming the data directory
pub const DATA_ENV: &str = "APPDEX_DATA";

const CONFIG_DIR: &str = ".appdex";
const CONFIG_FILE: &str = "config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Directory holding apps.json, extensions.json, faqs.json, guides.json
    pub dir: Option<String>,
}

/// Where the content index is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// JSON compiled into the binary
    Bundled,
    /// JSON files in a directory
    Directory(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Bundled => write!(f, "bundled"),
            DataSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data: DataSource,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching `start` and its parents, then the user config dir
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("appdex").join(CONFIG_FILE);
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Directory relative paths in a config file are resolved against
fn config_base_dir(config_path: &Path) -> &Path {
    let parent = config_path.parent().unwrap_or(Path::new("."));
    if parent.file_name().is_some_and(|name| name == CONFIG_DIR) {
        parent.parent().unwrap_or(Path::new("."))
    } else {
        parent
    }
}

fn resolve_config(start: &Path, env_data: Option<String>) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start);

    let data = if let Some(env_dir) = env_data.filter(|d| !d.trim().is_empty()) {
        DataSource::Directory(resolve_path(start, &env_dir))
    } else if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;
        match config.data.dir {
            Some(dir) => DataSource::Directory(resolve_path(config_base_dir(config_path), &dir)),
            None => DataSource::Bundled,
        }
    } else {
        DataSource::Bundled
    };

    Ok(ResolvedConfig { data, config_file })
}

/// Load configuration from all sources
pub fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    resolve_config(&cwd, std::env::var(DATA_ENV).ok())
}
