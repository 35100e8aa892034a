//! API.Bible verse provider.
//!
//! A chapter takes two requests: the book's chapter list (to find the
//! chapter id) and then the chapter text with inline `[n]` verse markers.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::scripture::VerseProvider;
use crate::bible::Language;
use crate::config::Config;
use crate::constants::api::CHAPTER_TEXT_QUERY;
use crate::constants::bible::MAX_VERSES_PER_CHAPTER;
use crate::error::{Error, Result};
use crate::types::BookCode;

/// Matches `[16]` style verse markers in chapter text.
#[allow(clippy::expect_used)]
static RE_VERSE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid regex: RE_VERSE_MARKER"));

/// Client for the API.Bible REST service
#[derive(Clone)]
pub struct ApiBibleProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl ApiBibleProvider {
    /// Create a new provider from config
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make an authenticated GET request to the API
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<(StatusCode, Value)> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client
            .get(&url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {path} failed: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok((status, Value::Null));
        }
        if !status.is_success() {
            let body: Value = resp.json().await.unwrap_or(Value::Null);
            let detail = body["message"].as_str().unwrap_or("unknown error");
            return Err(Error::api_status(
                format!("Request to {path} returned {status}: {detail}"),
                status.as_u16(),
            ));
        }

        let json = resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from {path}: {e}"), None))?;
        Ok((status, json))
    }

    /// Find the API's chapter id for a chapter number
    async fn chapter_id(&self, language: Language, book: &BookCode, chapter: u32) -> Result<String> {
        let path = format!("/bibles/{}/books/{}/chapters", language.version_id(), book);
        let (status, json) = self.get(&path, &[]).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(Error::chapter_not_found(book, chapter));
        }

        let data = json["data"].as_array()
            .ok_or_else(|| Error::parse("Missing 'data' array in chapters response", None))?;

        let wanted = chapter.to_string();
        data.iter()
            .find(|c| c["number"].as_str() == Some(wanted.as_str()))
            .and_then(|c| c["id"].as_str())
            .map(str::to_string)
            .ok_or_else(|| Error::chapter_not_found(book, chapter))
    }
}

#[async_trait]
impl VerseProvider for ApiBibleProvider {
    async fn fetch_chapter(&self, language: Language, book: &BookCode, chapter: u32) -> Result<Vec<String>> {
        let chapter_id = self.chapter_id(language, book, chapter).await?;
        tracing::debug!(%book, chapter, chapter_id = %chapter_id, "fetching chapter text");

        let path = format!("/bibles/{}/chapters/{}", language.version_id(), chapter_id);
        let (status, json) = self.get(&path, CHAPTER_TEXT_QUERY).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(Error::chapter_not_found(book, chapter));
        }

        let content = json["data"]["content"].as_str()
            .ok_or_else(|| Error::parse("Missing 'data.content' in chapter response", None))?;

        let verses = split_verses(content).unwrap();
        if verses.is_empty() {
            return Err(Error::parse(format!("No verse markers in {chapter_id}"), None));
        }
        Ok(verses)
    }

    fn name(&self) -> &'static str {
        "ApiBibleProvider"
    }
}

/// Split chapter text on `[n]` markers into verse-ordered texts.
///
/// Text before the first marker (headings) is dropped. Numbers the text
/// skips become blank entries. A marker past the longest chapter is an error.
pub fn split_verses(content: &str) -> Result<Vec<String>> {
    let markers: Vec<(usize, usize, usize)> = RE_VERSE_MARKER
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse::<usize>().ok()?;
            Some((number, whole.start(), whole.end()))
        })
        .filter(|(number, _, _)| *number > 0)
        .collect();

    if let Some(&(number, _, _)) = markers.iter().find(|(number, _, _)| *number > MAX_VERSES_PER_CHAPTER) {
        return Err(Error::parse(format!("Verse marker [{number}] is out of range"), None));
    }

    let mut verses: Vec<String> = Vec::new();
    for (i, &(number, _, text_start)) in markers.iter().enumerate() {
        let text_end = markers.get(i + 1).map_or(content.len(), |&(_, start, _)| start);
        let text = content[text_start..text_end].split_whitespace().collect::<Vec<_>>().join(" ");
        if verses.len() < number {
            verses.resize(number, String::new());
        }
        verses[number - 1] = text;
    }
    Ok(verses)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn splits_on_verse_markers() {
        let content = "     [1] In the beginning God created the heaven and the earth. \
                       [2] And the earth was without form,\n and void; [3] And God said, Let there be light.";
        let verses = split_verses(content).unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0], "In the beginning God created the heaven and the earth.");
        assert_eq!(verses[1], "And the earth was without form, and void;");
    }

    #[test]
    fn drops_headings_and_fills_gaps() {
        let verses = split_verses("The Creation [1] one [3] three").unwrap();
        assert_eq!(verses, vec!["one".to_string(), String::new(), "three".to_string()]);
    }

    #[test]
    fn no_markers_means_no_verses() {
        assert!(split_verses("just a heading").unwrap().is_empty());
    }

    #[test]
    fn huge_verse_marker_is_a_parse_error() {
        let err = split_verses("[1] one [4000000000] two").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(split_verses("[176] last").unwrap().len(), 176);
    }

    #[test]
    fn uses_config_endpoint() {
        let mut config = Config::default();
        config.api_key = "k".into();
        config.api_url = "http://localhost:9".into();
        let provider = ApiBibleProvider::new(&config);
        assert_eq!(provider.base_url, "http://localhost:9");
        assert_eq!(provider.name(), "ApiBibleProvider");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let mut config = Config::default();
        config.api_key = "k".into();
        config.api_url = "http://127.0.0.1:9".into();
        config.timeout = std::time::Duration::from_secs(2);
        let provider = ApiBibleProvider::new(&config);
        let err = provider
            .fetch_chapter(Language::Eng, &BookCode::new("GEN"), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
