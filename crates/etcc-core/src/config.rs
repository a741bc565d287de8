use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EtccError, Result};
use crate::report::DEFAULT_REPORT_FILE;

const CONFIG_FILE: &str = "config.toml";
const BASE_DIR_NAME: &str = ".etcc";

/// Directory classified when nothing else is given
pub const DEFAULT_ROOT: &str = "/etc";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# etcc configuration file
# Location: ~/.etcc/config.toml

[scan]
# Directory to classify
# Default: "/etc"
root = "/etc"

# Where the JSON report is written
# Default: "class.json"
output = "class.json"

# Glob patterns for resolved paths to skip
# Default: []
# Example: exclude = ["**/*.dpkg-old", "/etc/ssl/certs/*"]
exclude = []
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Traversal and output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Glob patterns matched against resolved paths
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILE)
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| EtccError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// `~/.etcc`, or `.etcc` when no home directory is known
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(BASE_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(BASE_DIR_NAME))
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scan.root" => Some(self.scan.root.display().to_string()),
            "scan.output" => Some(self.scan.output.display().to_string()),
            "scan.exclude" => Some(format!("{:?}", self.scan.exclude)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scan.root" => {
                self.scan.root = PathBuf::from(value.trim());
                Ok(())
            }
            "scan.output" => {
                self.scan.output = PathBuf::from(value.trim());
                Ok(())
            }
            "scan.exclude" => {
                self.scan.exclude = parse_string_list(value);
                Ok(())
            }
            _ => Err(EtccError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["scan.root", "scan.output", "scan.exclude"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
