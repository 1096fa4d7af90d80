//! Configuration loading
//!
//! Reads `~/.config/moodboard/config.toml`. A missing file means defaults;
//! a file that exists but cannot be parsed is reported, not ignored.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reqwest::Url;

pub use types::{ColorChoice, Config, DEFAULT_BASE_URL, DisplayConfig, ServerConfig};

use crate::error::MoodError;

const CONFIG_DIR: &str = "moodboard";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, MoodError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) => load_config_from_path(&path),
            None => {
                log::debug!("No home directory, using default config");
                Ok(Config::default())
            }
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, MoodError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Config {} not found, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(MoodError::Io(e)),
    };

    parse_config(&contents).map_err(|e| MoodError::InvalidConfig {
        path: path.display().to_string(),
        reason: e.message().to_string(),
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

impl ServerConfig {
    /// Parse the configured base URL
    ///
    /// Only `http` and `https` servers can host the analyze endpoint.
    pub fn base_url(&self) -> Result<Url, MoodError> {
        let invalid = |reason: String| MoodError::InvalidServerUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
