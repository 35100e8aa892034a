//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::bible::Language;
use crate::error::{Error, Result};

/// Default API.Bible endpoint.
pub const DEFAULT_API_URL: &str = "https://api.scripture.api.bible/v1";

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// API.Bible key; empty when the live provider is disabled
    pub api_key: String,
    /// API.Bible base URL
    pub api_url: String,
    /// Directory holding offline `{LANG}.json` Bibles
    pub data_path: Option<PathBuf>,
    /// Language selected at startup
    pub default_language: Language,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            data_path: None,
            default_language: Language::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(key) = env::var("SCRIPTURE_API_KEY") {
            config.api_key = key.trim().to_string();
        }

        if let Ok(url) = env::var("SCRIPTURE_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(code) = env::var("VERSEFINDER_LANGUAGE") {
            config.default_language = Language::from_code(&code).ok_or_else(|| {
                Error::config(
                    format!("Unknown language '{code}'"),
                    "Set VERSEFINDER_LANGUAGE to KOR, SPA or ENG",
                )
            })?;
        }

        if let Ok(secs) = env::var("VERSEFINDER_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                Error::config(
                    format!("Invalid timeout '{secs}'"),
                    "Set VERSEFINDER_TIMEOUT_SECS to a whole number of seconds",
                )
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.data_path = match env::var("VERSEFINDER_DATA_PATH") {
            Ok(path) => Some(data_dir_from(&path)?),
            Err(_) => default_data_dir(),
        };

        Ok(config)
    }

    /// Check if the live scripture API is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Expand `~` and require an existing directory.
fn data_dir_from(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(shellexpand::tilde(raw.trim()).to_string());
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::config(
            format!("Data path {} is not a directory", path.display()),
            "Point VERSEFINDER_DATA_PATH at a folder holding KOR.json, SPA.json or ENG.json",
        ))
    }
}

/// Platform data dir (e.g. `~/.local/share/versefinder`) when it exists.
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("versefinder"))
        .filter(|p| p.is_dir())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_use_sample_data() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.default_language, Language::Kor);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn data_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let found = data_dir_from(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(found, dir.path());

        let missing = dir.path().join("nope");
        let err = data_dir_from(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("VERSEFINDER_DATA_PATH"));
    }
}
