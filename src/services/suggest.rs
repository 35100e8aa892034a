//! "Did you mean" suggestions for unknown book abbreviations.
//!
//! Scores every book of a language by fuzzy-matching the typed text against
//! the book's full name, and each of its abbreviations against the typed
//! text. The best books are suggested by their shortest abbreviation.

use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::bible::LanguageTable;
use crate::types::BookCode;

/// Fuzzy book suggester.
pub struct BookSuggester {
    /// Minimum score threshold.
    pub min_score: i64,
    /// Maximum number of suggestions.
    pub limit: usize,
}

impl Default for BookSuggester {
    fn default() -> Self {
        Self { min_score: 10, limit: 3 }
    }
}

impl BookSuggester {
    /// Abbreviations the user may have meant by `typed`, best first.
    pub fn suggest(&self, typed: &str, table: &LanguageTable) -> Vec<String> {
        let typed_lower = typed.to_lowercase();
        if typed_lower.is_empty() {
            return Vec::new();
        }
        let matcher = SkimMatcherV2::default();

        let mut best: HashMap<&BookCode, i64> = HashMap::new();
        let mut bump = |code, score: Option<i64>| {
            if let Some(score) = score.filter(|s| *s >= self.min_score) {
                let entry = best.entry(code).or_insert(score);
                *entry = (*entry).max(score);
            }
        };

        for (code, name) in table.full_names() {
            bump(code, matcher.fuzzy_match(&name.to_lowercase(), &typed_lower));
        }
        for (abbr, code) in table.abbreviations() {
            bump(code, matcher.fuzzy_match(&typed_lower, &abbr.to_lowercase()));
        }

        let mut scored: Vec<(&BookCode, i64)> = best.into_iter().collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        scored
            .into_iter()
            .filter_map(|(code, _)| preferred_abbreviation(table, code))
            .take(self.limit)
            .collect()
    }
}

/// Shortest abbreviation for a book, ties broken lexically.
fn preferred_abbreviation(table: &LanguageTable, code: &BookCode) -> Option<String> {
    table
        .abbreviations()
        .filter(|(_, c)| *c == code)
        .map(|(abbr, _)| abbr)
        .min_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::{BookCatalog, Language};

    #[test]
    fn full_korean_name_suggests_abbreviation() {
        let catalog = BookCatalog::standard();
        let table = catalog.table(Language::Kor).unwrap();
        let suggestions = BookSuggester::default().suggest("창세기", table);
        assert_eq!(suggestions.first().map(String::as_str), Some("창"));
    }

    #[test]
    fn full_english_name_suggests_shortest_abbreviation() {
        let catalog = BookCatalog::standard();
        let table = catalog.table(Language::Eng).unwrap();
        let suggestions = BookSuggester::default().suggest("Genesis", table);
        assert_eq!(suggestions.first().map(String::as_str), Some("Gn"));
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn nothing_for_unrelated_text() {
        let catalog = BookCatalog::standard();
        let table = catalog.table(Language::Kor).unwrap();
        assert!(BookSuggester::default().suggest("xyz", table).is_empty());
        assert!(BookSuggester::default().suggest("", table).is_empty());
    }
}
