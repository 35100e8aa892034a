//! Verse-content providers.
//!
//! The resolver only needs "the ordered verse texts of one chapter". Where
//! those come from (API.Bible, JSON files on disk, a built-in sample) is
//! decided here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bible::Language;
use crate::config::Config;
use crate::error::Result;
use crate::types::BookCode;

use super::api_bible::ApiBibleProvider;
use super::file_provider::FileProvider;
use super::static_provider::StaticProvider;

/// Trait for verse-content providers.
///
/// Different implementations can provide scripture from various sources
/// (API, local files, embedded data).
#[async_trait]
pub trait VerseProvider: Send + Sync {
    /// Fetch every verse of a chapter, verse 1 first.
    ///
    /// # Arguments
    /// * `language` - Selects the Bible version
    /// * `book` - Canonical book code
    /// * `chapter` - 1-based chapter number
    ///
    /// # Returns
    /// The chapter's verse texts, or `Error::ChapterNotFound` when the
    /// version has no such chapter.
    async fn fetch_chapter(&self, language: Language, book: &BookCode, chapter: u32) -> Result<Vec<String>>;

    /// Get the name of this provider (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Pick a provider for the configuration: live API when a key is set, then
/// offline JSON Bibles, then the built-in sample.
pub fn from_config(config: &Config) -> Result<Arc<dyn VerseProvider>> {
    if config.has_api_key() {
        tracing::info!(url = %config.api_url, "using API.Bible provider");
        return Ok(Arc::new(ApiBibleProvider::new(config)));
    }

    if let Some(path) = &config.data_path {
        tracing::info!(path = %path.display(), "using offline Bible files");
        return Ok(Arc::new(FileProvider::new(path.clone())));
    }

    tracing::info!("no API key or data path configured, using sample verses");
    Ok(Arc::new(StaticProvider::with_sample_data()?))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn falls_back_to_sample_data() {
        let provider = from_config(&Config::default()).unwrap();
        assert_eq!(provider.name(), "StaticProvider");
    }

    #[test]
    fn prefers_api_when_key_set() {
        let mut config = Config::default();
        config.api_key = "secret".into();
        assert_eq!(from_config(&config).unwrap().name(), "ApiBibleProvider");
    }

    #[test]
    fn uses_files_when_data_path_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.data_path = Some(dir.path().to_path_buf());
        assert_eq!(from_config(&config).unwrap().name(), "FileProvider");
    }
}
