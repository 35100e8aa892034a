//! Offline verse provider reading JSON Bibles from disk.
//!
//! One file per language, `{data_path}/{LANG}.json`, shaped
//! `{ "GEN": { "1": { "1": "In the beginning ..." } } }`. A file is read on
//! first use and kept for the life of the provider.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::scripture::VerseProvider;
use crate::bible::Language;
use crate::constants::bible::MAX_VERSES_PER_CHAPTER;
use crate::error::{Error, Result};
use crate::types::BookCode;

/// Bible data structure: Book -> Chapter -> Verse -> Text
type BibleData = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Verse provider backed by JSON files
pub struct FileProvider {
    data_path: PathBuf,
    cache: HashMap<Language, OnceCell<BibleData>>,
}

impl FileProvider {
    /// Create a provider reading from `data_path`.
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            cache: Language::all().iter().map(|lang| (*lang, OnceCell::new())).collect(),
        }
    }

    /// Path of the JSON file for a language.
    pub fn file_for(&self, language: Language) -> PathBuf {
        self.data_path.join(format!("{}.json", language.code()))
    }

    /// Load a language's file into cache
    async fn load(&self, language: Language) -> Result<&BibleData> {
        let cell = self
            .cache
            .get(&language)
            .ok_or_else(|| Error::Msg(format!("No cache slot for {language}")))?;

        cell.get_or_try_init(|| async {
            let path = self.file_for(language);
            let content = fs_err::read_to_string(&path).map_err(|e| Error::io(e, path.clone()))?;
            let data: BibleData = serde_json::from_str(&content)
                .map_err(|e| Error::parse(format!("Invalid Bible JSON: {e}"), path.clone()))?;
            tracing::debug!(path = %path.display(), books = data.len(), "loaded Bible file");
            Ok(data)
        })
        .await
    }
}

#[async_trait]
impl VerseProvider for FileProvider {
    async fn fetch_chapter(&self, language: Language, book: &BookCode, chapter: u32) -> Result<Vec<String>> {
        let bible = self.load(language).await?;

        let chapter_data = bible
            .get(book.as_str())
            .and_then(|chapters| chapters.get(&chapter.to_string()))
            .ok_or_else(|| Error::chapter_not_found(book, chapter))?;

        let mut numbered: Vec<(usize, &String)> = chapter_data
            .iter()
            .filter_map(|(verse, text)| Some((verse.parse::<usize>().ok().filter(|&n| n > 0)?, text)))
            .collect();
        numbered.sort_by_key(|(n, _)| *n);

        let count = numbered.last().map_or(0, |(n, _)| *n);
        if count > MAX_VERSES_PER_CHAPTER {
            return Err(Error::parse(
                format!("Verse {book} {chapter}:{count} is out of range"),
                self.file_for(language),
            ));
        }
        let mut verses = vec![String::new(); count];
        for (n, text) in numbered {
            verses[n - 1].clone_from(text);
        }
        Ok(verses)
    }

    fn name(&self) -> &'static str {
        "FileProvider"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn write_bible(dir: &std::path::Path) {
        let json = r#"{
            "GEN": { "1": { "1": "In the beginning", "3": "Let there be light", "2": "Without form" } },
            "JHN": { "3": { "16": "For God so loved the world" } }
        }"#;
        std::fs::write(dir.join("ENG.json"), json).unwrap();
    }

    #[tokio::test]
    async fn reads_chapters_in_verse_order() {
        let dir = tempfile::tempdir().unwrap();
        write_bible(dir.path());
        let provider = FileProvider::new(dir.path().to_path_buf());

        let verses = provider.fetch_chapter(Language::Eng, &BookCode::new("GEN"), 1).await.unwrap();
        assert_eq!(verses, vec!["In the beginning", "Without form", "Let there be light"]);

        let verses = provider.fetch_chapter(Language::Eng, &BookCode::new("JHN"), 3).await.unwrap();
        assert_eq!(verses.len(), 16);
        assert_eq!(verses[15], "For God so loved the world");
    }

    #[tokio::test]
    async fn missing_chapter_and_book() {
        let dir = tempfile::tempdir().unwrap();
        write_bible(dir.path());
        let provider = FileProvider::new(dir.path().to_path_buf());

        let err = provider.fetch_chapter(Language::Eng, &BookCode::new("GEN"), 2).await.unwrap_err();
        assert!(matches!(err, Error::ChapterNotFound { chapter: 2, .. }));
        let err = provider.fetch_chapter(Language::Eng, &BookCode::new("REV"), 1).await.unwrap_err();
        assert!(matches!(err, Error::ChapterNotFound { .. }));
    }

    #[tokio::test]
    async fn huge_verse_key_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{ "GEN": { "1": { "1": "In the beginning", "4000000000": "x" } } }"#;
        std::fs::write(dir.path().join("ENG.json"), json).unwrap();
        let provider = FileProvider::new(dir.path().to_path_buf());

        let err = provider.fetch_chapter(Language::Eng, &BookCode::new("GEN"), 1).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path().to_path_buf());
        let err = provider.fetch_chapter(Language::Kor, &BookCode::new("GEN"), 1).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("SPA.json"), "{ not json").unwrap();
        let provider = FileProvider::new(dir.path().to_path_buf());
        let err = provider.fetch_chapter(Language::Spa, &BookCode::new("GEN"), 1).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
