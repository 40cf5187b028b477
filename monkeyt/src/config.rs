//! Configuration module for the monkeyt CLI.
//!
//! Settings load from a `monkeyt.toml`: an explicit `--config` path wins,
//! otherwise the file is looked up in the user's configuration directory,
//! and missing files fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkeyt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Prompt printed before each REPL line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether the REPL prints its welcome banner.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Default output mode: `value`, `ast` or `tokens`.
    #[serde(default = "default_emit")]
    pub emit: String,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

fn default_true() -> bool {
    true
}

fn default_emit() -> String {
    "value".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_true(),
            emit: default_emit(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Config> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The default configuration file location, if the platform has a
    /// configuration directory.
    pub fn config_file_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
