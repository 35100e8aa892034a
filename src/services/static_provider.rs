//! In-memory verse provider keyed by citation strings.
//!
//! Datasets are written as `"{abbrev}{chapter}:{verse}" -> text` maps, the
//! same shape a hand-made mock would use. Keys are parsed with the reference
//! grammar so any single-verse citation the resolver accepts works as a key.

use std::collections::HashMap;

use async_trait::async_trait;

use super::scripture::VerseProvider;
use crate::bible::{normalize_query, parse_reference, BookCatalog, Language, ParsedReference};
use crate::constants::bible::MAX_VERSES_PER_CHAPTER;
use crate::error::{Error, Result};
use crate::types::BookCode;

const KOR_SAMPLE: &[(&str, &str)] = &[
    ("창1:1", "태초에 하나님이 천지를 창조하시니라"),
    ("창1:2", "땅이 혼돈하고 공허하며 흑암이 깊음 위에 있고 하나님의 영은 수면 위에 운행하시니라"),
    ("창1:3", "하나님이 이르시되 빛이 있으라 하시니 빛이 있었고"),
    ("창1:4", "빛이 하나님이 보시기에 좋았더라 하나님이 빛과 어둠을 나누사"),
    ("창1:5", "빛을 낮이라 부르시고 어둠을 밤이라 부르시니라 저녁이 되고 아침이 되니 이는 첫째 날이니라"),
    ("창1:6", "하나님이 이르시되 물 가운데에 궁창이 있어 물과 물로 나뉘라 하시고"),
    ("창1:7", "하나님이 궁창을 만드사 궁창 아래의 물과 궁창 위의 물로 나뉘게 하시니 그대로 되니라"),
    ("창1:8", "하나님이 궁창을 하늘이라 부르시니라 저녁이 되고 아침이 되니 이는 둘째 날이니라"),
    ("창1:9", "하나님이 이르시되 천하의 물이 한 곳으로 모이고 뭍이 드러나라 하시니 그대로 되니라"),
    ("창1:10", "하나님이 뭍을 땅이라 부르시고 모인 물을 바다라 부르시니 하나님이 보시기에 좋았더라"),
    ("요3:16", "하나님이 세상을 이처럼 사랑하사 독생자를 주셨으니 이는 저를 믿는 자마다 멸망하지 않고 영생을 얻게 하려 하심이니라"),
    ("시23:1", "여호와는 나의 목자시니 내게 부족함이 없으리로다"),
    ("시23:2", "그가 나를 푸른 초장에 누이시며 쉴 만한 물가로 인도하시는도다"),
    ("시23:3", "내 영혼을 소생시키시고 자기 이름을 위하여 의의 길로 인도하시는도다"),
    ("시23:4", "내가 사망의 음침한 골짜기로 다닐지라도 해를 두려워하지 않을 것은 주께서 나와 함께 하심이라 주의 지팡이와 막대기가 나를 안위하시나이다"),
    ("시23:5", "주께서 내 원수의 목전에서 내게 상을 차려 주시고 기름을 내 머리에 부으셨으니 내 잔이 넘치나이다"),
    ("시23:6", "내 평생에 선하심과 인자하심이 반드시 나를 따르리니 내가 여호와의 집에 영원히 살리로다"),
    ("마28:19", "그러므로 너희는 가서 모든 민족을 제자로 삼아 아버지와 아들과 성령의 이름으로 세례를 베풀고"),
    ("마28:20", "내가 너희에게 분부한 모든 것을 가르쳐 지키게 하라 볼지어다 내가 세상 끝날까지 너희와 항상 함께 있으리라 하시니라"),
    ("롬8:28", "우리가 알거니와 하나님을 사랑하는 자 곧 그의 뜻대로 부르심을 입은 자들에게는 모든 것이 합력하여 선을 이루느니라"),
];

const ENG_SAMPLE: &[(&str, &str)] = &[
    ("Gen1:1", "In the beginning God created the heaven and the earth."),
    ("Gen1:2", "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters."),
    ("Gen1:3", "And God said, Let there be light: and there was light."),
    ("Joh3:16", "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
    ("Psa23:1", "The LORD is my shepherd; I shall not want."),
    ("1Co13:4", "Charity suffereth long, and is kind; charity envieth not; charity vaunteth not itself, is not puffed up,"),
];

/// Verse provider backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    chapters: HashMap<(Language, BookCode, u32), Vec<String>>,
}

impl StaticProvider {
    /// An empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in sample verses (Korean and English).
    pub fn with_sample_data() -> Result<Self> {
        let catalog = BookCatalog::shared_standard();
        Self::new()
            .with_keyed(Language::Kor, &catalog, KOR_SAMPLE.iter().copied())?
            .with_keyed(Language::Eng, &catalog, ENG_SAMPLE.iter().copied())
    }

    /// Add verses keyed by `"{abbrev}{chapter}:{verse}"`.
    ///
    /// Verses a chapter skips are stored as blanks, which the expander
    /// treats as absent.
    pub fn with_keyed<K, V>(
        mut self,
        language: Language,
        catalog: &BookCatalog,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, text) in entries {
            let key = key.as_ref();
            let Ok(ParsedReference::Single { book, chapter, verse }) = parse_reference(&normalize_query(key)) else {
                return Err(Error::parse(format!("'{key}' is not a single-verse citation"), None));
            };
            let code = catalog
                .abbreviation_to_code(language, &book)
                .ok_or_else(|| Error::parse(format!("'{book}' is not a {language} abbreviation"), None))?;
            self.insert_verse(language, code, chapter, verse, text.into())?;
        }
        Ok(self)
    }

    /// Store one verse, growing the chapter as needed.
    pub fn insert_verse(
        &mut self,
        language: Language,
        book: BookCode,
        chapter: u32,
        verse: u32,
        text: String,
    ) -> Result<()> {
        let index = usize::try_from(verse)
            .ok()
            .and_then(|v| v.checked_sub(1))
            .filter(|&i| i < MAX_VERSES_PER_CHAPTER)
            .ok_or_else(|| Error::parse(format!("Verse {book} {chapter}:{verse} is out of range"), None))?;

        let verses = self.chapters.entry((language, book, chapter)).or_default();
        if verses.len() <= index {
            verses.resize(index + 1, String::new());
        }
        verses[index] = text;
        Ok(())
    }
}

#[async_trait]
impl VerseProvider for StaticProvider {
    async fn fetch_chapter(&self, language: Language, book: &BookCode, chapter: u32) -> Result<Vec<String>> {
        self.chapters
            .get(&(language, book.clone(), chapter))
            .cloned()
            .ok_or_else(|| Error::chapter_not_found(book, chapter))
    }

    fn name(&self) -> &'static str {
        "StaticProvider"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[tokio::test]
    async fn sample_has_genesis_one() {
        let provider = StaticProvider::with_sample_data().unwrap();
        let verses = provider
            .fetch_chapter(Language::Kor, &BookCode::new("GEN"), 1)
            .await
            .unwrap();
        assert_eq!(verses.len(), 10);
        assert_eq!(verses[0], "태초에 하나님이 천지를 창조하시니라");
    }

    #[tokio::test]
    async fn sparse_chapters_are_padded() {
        let provider = StaticProvider::with_sample_data().unwrap();
        let verses = provider
            .fetch_chapter(Language::Kor, &BookCode::new("JHN"), 3)
            .await
            .unwrap();
        assert_eq!(verses.len(), 16);
        assert!(verses[..15].iter().all(String::is_empty));
        assert!(verses[15].starts_with("하나님이 세상을"));
    }

    #[tokio::test]
    async fn missing_chapter_is_reported() {
        let provider = StaticProvider::with_sample_data().unwrap();
        let err = provider
            .fetch_chapter(Language::Kor, &BookCode::new("GEN"), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ChapterNotFound { chapter: 2, .. }));
    }

    #[test]
    fn rejects_verse_numbers_past_any_chapter() {
        let catalog = BookCatalog::standard();
        let result = StaticProvider::new().with_keyed(Language::Kor, &catalog, [("창1:999999999", "x")]);
        assert!(matches!(result, Err(Error::Parse { .. })));

        let mut provider = StaticProvider::new();
        assert!(provider.insert_verse(Language::Kor, "PSA".into(), 119, 176, "x".into()).is_ok());
        assert!(provider.insert_verse(Language::Kor, "PSA".into(), 119, 0, "x".into()).is_err());
    }

    #[test]
    fn rejects_keys_that_are_not_single_verses() {
        let catalog = BookCatalog::standard();
        let result = StaticProvider::new().with_keyed(Language::Kor, &catalog, [("창1:1-3", "x")]);
        assert!(matches!(result, Err(Error::Parse { .. })));

        let result = StaticProvider::new().with_keyed(Language::Kor, &catalog, [("Gen1:1", "x")]);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
