//! Book catalog: per-language abbreviation and full-name tables.
//!
//! Tables are built once and never mutated afterwards. Adding a language
//! means adding a `Language` variant and a `LanguageTable`; the grammar and
//! the expander only ever see the catalog through its lookups.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::tables::{
    CANONICAL_BOOKS, ENG_ABBREVIATIONS, ENG_NAMES, KOR_ABBREVIATIONS, KOR_NAMES,
    SPA_ABBREVIATIONS, SPA_NAMES,
};
use crate::error::{Error, Result};
use crate::types::BookCode;

/// Supported languages, each tied to one Bible version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// Korean, 개역한글.
    #[default]
    Kor,
    /// Spanish, Reina Valera 1960.
    Spa,
    /// English, King James Version.
    Eng,
}

impl Language {
    /// Returns all languages in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Kor, Self::Spa, Self::Eng]
    }

    /// Three-letter selector code (e.g. "KOR").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Kor => "KOR",
            Self::Spa => "SPA",
            Self::Eng => "ENG",
        }
    }

    /// Opaque version id used by the scripture API.
    #[must_use]
    pub const fn version_id(self) -> &'static str {
        match self {
            Self::Kor => "c13c4a36c587ca7c-01",
            Self::Spa => "592420522e16049f-01",
            Self::Eng => "de4e12af7f28f599-02",
        }
    }

    /// Display name of the Bible version.
    #[must_use]
    pub const fn version_name(self) -> &'static str {
        match self {
            Self::Kor => "개역한글",
            Self::Spa => "Reina Valera 1960",
            Self::Eng => "King James Version",
        }
    }

    /// Example citations shown when a query is not understood.
    #[must_use]
    pub const fn examples(self) -> &'static str {
        match self {
            Self::Kor => "'창1:1', '요3:16'",
            Self::Spa => "'Gn1:1', 'Jn3:16'",
            Self::Eng => "'Gen1:1', 'Jn3:16'",
        }
    }

    /// Cycle to the next language (for the Tab key).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Kor => Self::Spa,
            Self::Spa => Self::Eng,
            Self::Eng => Self::Kor,
        }
    }

    /// Parse a selector code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::Msg(format!("Unknown language code: {s}")))
    }
}

/// Abbreviation and full-name tables for one language.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    abbreviations: HashMap<String, BookCode>,
    /// Lowercased abbreviation -> code, only where the lowercase form is unique
    folded: HashMap<String, BookCode>,
    names: HashMap<BookCode, String>,
    /// Abbreviations sorted longest first, ties broken lexically
    by_length: Vec<String>,
}

impl LanguageTable {
    /// Build a table from abbreviation and full-name pairs.
    ///
    /// Later duplicates of an abbreviation overwrite earlier ones.
    pub fn new<A, N, S, T>(abbreviations: A, names: N) -> Self
    where
        A: IntoIterator<Item = (S, T)>,
        N: IntoIterator<Item = (T, S)>,
        S: Into<String>,
        T: Into<String>,
    {
        let abbreviations: HashMap<String, BookCode> = abbreviations
            .into_iter()
            .map(|(abbr, code)| (abbr.into(), BookCode::new(code)))
            .collect();
        let names: HashMap<BookCode, String> = names
            .into_iter()
            .map(|(code, name)| (BookCode::new(code), name.into()))
            .collect();

        let mut fold_counts: HashMap<String, usize> = HashMap::new();
        for abbr in abbreviations.keys() {
            *fold_counts.entry(abbr.to_lowercase()).or_default() += 1;
        }
        let folded = abbreviations
            .iter()
            .map(|(abbr, code)| (abbr.to_lowercase(), code.clone()))
            .filter(|(lower, _)| fold_counts.get(lower) == Some(&1))
            .collect();

        let mut by_length: Vec<String> = abbreviations.keys().cloned().collect();
        by_length.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self { abbreviations, folded, names, by_length }
    }

    /// Canonical code for an abbreviation.
    ///
    /// Exact matches win; otherwise a case-insensitive match is accepted when
    /// it is unambiguous.
    pub fn code_for(&self, abbreviation: &str) -> Option<&BookCode> {
        self.abbreviations
            .get(abbreviation)
            .or_else(|| self.folded.get(&abbreviation.to_lowercase()))
    }

    /// Display name for a canonical code.
    pub fn full_name(&self, code: &BookCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Abbreviations, longest first.
    pub fn abbreviations_longest_first(&self) -> impl Iterator<Item = &str> {
        self.by_length.iter().map(String::as_str)
    }

    /// All (abbreviation, code) pairs in unspecified order.
    pub fn abbreviations(&self) -> impl Iterator<Item = (&str, &BookCode)> {
        self.abbreviations.iter().map(|(abbr, code)| (abbr.as_str(), code))
    }

    /// All (code, full name) pairs in unspecified order.
    pub fn full_names(&self) -> impl Iterator<Item = (&BookCode, &str)> {
        self.names.iter().map(|(code, name)| (code, name.as_str()))
    }

    /// Check that every abbreviation targets a named, canonical book.
    pub fn validate(&self) -> Result<()> {
        let canonical: HashSet<&str> = CANONICAL_BOOKS.iter().copied().collect();

        for code in self.names.keys() {
            if !canonical.contains(code.as_str()) {
                return Err(Error::config(
                    format!("'{code}' is not a canonical book code"),
                    "Use one of the 66 canonical codes (GEN ... REV)",
                ));
            }
        }

        for (abbr, code) in &self.abbreviations {
            if !self.names.contains_key(code) {
                return Err(Error::config(
                    format!("abbreviation '{abbr}' maps to '{code}', which has no full name"),
                    "Add the code to the language's full-name table",
                ));
            }
        }

        Ok(())
    }
}

/// Immutable set of language tables shared by every resolution.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    tables: HashMap<Language, LanguageTable>,
}

lazy_static! {
    static ref STANDARD_CATALOG: Arc<BookCatalog> = Arc::new(BookCatalog::standard());
}

impl BookCatalog {
    /// An empty catalog; add tables with [`BookCatalog::with_table`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the table for a language.
    #[must_use]
    pub fn with_table(mut self, language: Language, table: LanguageTable) -> Self {
        self.tables.insert(language, table);
        self
    }

    /// The built-in Korean, Spanish and English tables.
    pub fn standard() -> Self {
        Self::new()
            .with_table(
                Language::Kor,
                LanguageTable::new(KOR_ABBREVIATIONS.iter().copied(), KOR_NAMES.iter().copied()),
            )
            .with_table(
                Language::Spa,
                LanguageTable::new(SPA_ABBREVIATIONS.iter().copied(), SPA_NAMES.iter().copied()),
            )
            .with_table(
                Language::Eng,
                LanguageTable::new(ENG_ABBREVIATIONS.iter().copied(), ENG_NAMES.iter().copied()),
            )
    }

    /// Process-wide handle to the built-in catalog.
    pub fn shared_standard() -> Arc<Self> {
        Arc::clone(&STANDARD_CATALOG)
    }

    /// Table for a language, if the catalog has one.
    pub fn table(&self, language: Language) -> Option<&LanguageTable> {
        self.tables.get(&language)
    }

    /// Resolve a typed abbreviation to its canonical code.
    pub fn abbreviation_to_code(&self, language: Language, raw: &str) -> Option<BookCode> {
        self.table(language)?.code_for(raw).cloned()
    }

    /// Display name for a code; falls back to the code itself.
    pub fn code_to_full_name(&self, language: Language, code: &BookCode) -> String {
        self.table(language)
            .and_then(|table| table.full_name(code))
            .map_or_else(|| code.to_string(), str::to_string)
    }

    /// Validate every table.
    pub fn validate(&self) -> Result<()> {
        self.tables.values().try_for_each(LanguageTable::validate)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn standard_tables_are_consistent() {
        let catalog = BookCatalog::standard();
        catalog.validate().unwrap();
        for lang in Language::all() {
            let table = catalog.table(*lang).unwrap();
            assert_eq!(table.full_names().count(), 66, "{lang} should name every book");
        }
    }

    #[test]
    fn abbreviation_lookup() {
        let catalog = BookCatalog::standard();
        assert_eq!(catalog.abbreviation_to_code(Language::Kor, "요"), Some(BookCode::new("JHN")));
        assert_eq!(catalog.abbreviation_to_code(Language::Kor, "고전"), Some(BookCode::new("1CO")));
        assert_eq!(catalog.abbreviation_to_code(Language::Spa, "1Co"), Some(BookCode::new("1CO")));
        assert_eq!(catalog.abbreviation_to_code(Language::Eng, "Ps"), Some(BookCode::new("PSA")));
        assert_eq!(catalog.abbreviation_to_code(Language::Kor, "Gen"), None);
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive() {
        let catalog = BookCatalog::standard();
        assert_eq!(catalog.abbreviation_to_code(Language::Eng, "gen"), Some(BookCode::new("GEN")));
        assert_eq!(catalog.abbreviation_to_code(Language::Eng, "1co"), Some(BookCode::new("1CO")));
    }

    #[test]
    fn full_name_falls_back_to_code() {
        let catalog = BookCatalog::standard();
        assert_eq!(catalog.code_to_full_name(Language::Kor, &BookCode::new("JHN")), "요한복음");
        assert_eq!(catalog.code_to_full_name(Language::Eng, &BookCode::new("SNG")), "Song of Solomon");
        assert_eq!(catalog.code_to_full_name(Language::Eng, &BookCode::new("XYZ")), "XYZ");

        let partial = BookCatalog::new().with_table(
            Language::Eng,
            LanguageTable::new([("Gen", "GEN")], [("GEN", "Genesis")]),
        );
        assert_eq!(partial.code_to_full_name(Language::Eng, &BookCode::new("EXO")), "EXO");
        assert_eq!(partial.code_to_full_name(Language::Kor, &BookCode::new("GEN")), "GEN");
    }

    #[test]
    fn validate_rejects_unnamed_codes() {
        let table = LanguageTable::new([("Gen", "GEN"), ("Ex", "EXO")], [("GEN", "Genesis")]);
        assert!(matches!(table.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn validate_rejects_non_canonical_codes() {
        let table = LanguageTable::new([("Tob", "TOB")], [("TOB", "Tobit")]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn abbreviations_sorted_longest_first() {
        let table = LanguageTable::new(
            [("1", "1CO"), ("1CO", "1CO"), ("1C", "1CO")],
            [("1CO", "1 Corinthians")],
        );
        let order: Vec<&str> = table.abbreviations_longest_first().collect();
        assert_eq!(order, vec!["1CO", "1C", "1"]);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("kor"), Some(Language::Kor));
        assert_eq!("ENG".parse::<Language>().unwrap(), Language::Eng);
        assert!("XYZ".parse::<Language>().is_err());
        assert_eq!(Language::Eng.next(), Language::Kor);
        assert_eq!(Language::Kor.version_name(), "개역한글");
    }
}
