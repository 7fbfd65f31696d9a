//! Configuration loading
//!
//! Reads `~/.config/astro-archive/config.toml`. A missing file means defaults;
//! a malformed one is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ArchiveError;

mod types;

pub use types::Config;

const CONFIG_DIR: &str = "astro-archive";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from an explicit path, or from the default location
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ArchiveError> {
    if let Some(path) = explicit {
        let contents = fs::read_to_string(path)?;
        return parse_config(&contents, path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ArchiveError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents, path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, ArchiveError> {
    let config: Config = toml::from_str(content).map_err(|e| ArchiveError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;
    validate_endpoint(&config.backend.endpoint)?;
    Ok(config)
}

impl Config {
    /// Apply a command-line endpoint on top of the file configuration
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Result<Self, ArchiveError> {
        if let Some(endpoint) = endpoint {
            validate_endpoint(&endpoint)?;
            self.backend.endpoint = endpoint;
        }
        Ok(self)
    }
}

/// Reject endpoints reqwest could never POST to
pub fn validate_endpoint(endpoint: &str) -> Result<(), ArchiveError> {
    let invalid = || ArchiveError::InvalidEndpoint(endpoint.to_string());

    if endpoint.trim().is_empty() {
        return Err(invalid());
    }

    let url = reqwest::Url::parse(endpoint.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
