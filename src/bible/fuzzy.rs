//! Longest-prefix book matching for queries the grammar cannot parse.
//!
//! The fallback only recovers a book and a chapter. Whatever follows the
//! chapter number is ignored, so the result is always a whole-chapter
//! reference.

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageTable, ParsedReference};

#[allow(clippy::expect_used)]
static RE_LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("valid regex: RE_LEADING_DIGITS"));

/// First abbreviation, longest first, that is a literal prefix of `input`.
///
/// Trying longer abbreviations first keeps "요" from shadowing "요일".
pub fn find_possible_book<'t>(input: &str, table: &'t LanguageTable) -> Option<&'t str> {
    table
        .abbreviations_longest_first()
        .find(|abbr| input.starts_with(abbr))
}

/// Recover a chapter reference from a book prefix and a leading digit run.
pub fn fallback_reference(normalized: &str, table: &LanguageTable) -> Option<ParsedReference> {
    let book = find_possible_book(normalized, table)?;
    let remaining = &normalized[book.len()..];
    let digits = RE_LEADING_DIGITS.captures(remaining)?.get(1)?.as_str();
    let chapter = digits.parse::<u32>().ok().filter(|&n| n > 0)?;

    tracing::debug!(book, chapter, input = normalized, "fuzzy fallback matched");
    Some(ParsedReference::Chapter { book: book.to_string(), chapter })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::{BookCatalog, Language};

    fn korean() -> LanguageTable {
        BookCatalog::standard().table(Language::Kor).cloned().unwrap()
    }

    #[test]
    fn longest_prefix_wins() {
        let table = LanguageTable::new(
            [("1", "1CO"), ("1CO", "1CO")],
            [("1CO", "1 Corinthians")],
        );
        assert_eq!(find_possible_book("1CO13:4-7", &table), Some("1CO"));
        assert_eq!(find_possible_book("1Thing", &table), Some("1"));
    }

    #[test]
    fn longer_korean_abbreviation_beats_its_prefix() {
        let table = korean();
        assert_eq!(find_possible_book("요일4:8,16,19,21", &table), Some("요일"));
        assert_eq!(find_possible_book("요3:16,17,18,19", &table), Some("요"));
    }

    #[test]
    fn fallback_only_yields_whole_chapters() {
        let table = korean();
        assert_eq!(
            fallback_reference("창1:1-3,5-7,9", &table),
            Some(ParsedReference::Chapter { book: "창".into(), chapter: 1 })
        );
        assert_eq!(
            fallback_reference("요일4:8,16,19,21", &table),
            Some(ParsedReference::Chapter { book: "요일".into(), chapter: 4 })
        );
    }

    #[test]
    fn fallback_recovers_numeric_prefixed_books() {
        let table = LanguageTable::new(
            [("1", "1CO"), ("1CO", "1CO")],
            [("1CO", "1 Corinthians")],
        );
        assert_eq!(
            fallback_reference("1CO13", &table),
            Some(ParsedReference::Chapter { book: "1CO".into(), chapter: 13 })
        );
    }

    #[test]
    fn fallback_requires_a_chapter() {
        let table = korean();
        assert_eq!(fallback_reference("창세기", &table), None);
        assert_eq!(fallback_reference("창:1", &table), None);
        assert_eq!(fallback_reference("창0", &table), None);
        assert_eq!(fallback_reference("xyz1:1", &table), None);
    }
}
