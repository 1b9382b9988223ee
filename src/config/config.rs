use crate::sequence_processor::collectors::DEFAULT_TAIL_LENGTH;
use crate::sequence_processor::readers::DEFAULT_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory used when a command gets no `--output_dir`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub gzip_output: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default = "default_read_buffer_capacity")]
    pub read_buffer_capacity: usize,
    #[serde(default = "default_tail_length")]
    pub tail_length: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_threads() -> usize {
    1
}

fn default_read_buffer_capacity() -> usize {
    DEFAULT_BUFFER_CAPACITY
}

fn default_tail_length() -> usize {
    DEFAULT_TAIL_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            gzip_output: false,
            log_level: default_log_level(),
            threads: default_threads(),
            read_buffer_capacity: default_read_buffer_capacity(),
            tail_length: default_tail_length(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "srna", "srna-tools")
}

impl Config {
    /// Location of `config.toml`, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Reads the user's config file. A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config file {}: {:#}", path.display(), e);
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path().context("No configuration directory on this platform")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
