use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::ScanError;
use crate::scanner::ScanOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_identifier_len: usize,
    pub format: OutputFormat,
    pub show_symbols: bool,
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_identifier_len: ScanOptions::default().max_identifier_len,
            format: OutputFormat::Text,
            show_symbols: true,
            show_stats: true,
        }
    }
}

impl Config {
    /// Loads the config from [`Config::get_config_path`]. A missing file
    /// means defaults; a malformed one is an error.
    pub fn load() -> Result<Self, ScanError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ScanError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|source| ScanError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ScanError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(|source| ScanError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents).map_err(|e| ScanError::io(path, e))
    }

    /// `$MSCAN_CONFIG` if set, otherwise `~/.mscan/config.json`.
    pub fn get_config_path() -> PathBuf {
        if let Ok(custom) = env::var("MSCAN_CONFIG") {
            return PathBuf::from(custom);
        }
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".mscan")
            .join("config.json")
    }

    pub fn scan_options(&self, quiet: bool) -> ScanOptions {
        ScanOptions {
            max_identifier_len: self.max_identifier_len,
            quiet,
        }
    }
}
