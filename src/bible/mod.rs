//! Bible reference parsing and verse expansion.
//!
//! A raw query goes through [`grammar::parse_reference`] (with
//! [`fuzzy::fallback_reference`] behind it) to become a [`ParsedReference`];
//! [`expand::expand`] then turns that reference plus chapter texts into
//! [`ResolvedVerse`] rows. Book tables live in [`catalog`].

pub mod catalog;
pub mod expand;
pub mod fuzzy;
pub mod grammar;
pub mod tables;

use std::ops::RangeInclusive;

use serde::Serialize;

pub use catalog::{BookCatalog, Language, LanguageTable};
pub use expand::{expand, ChapterSet};
pub use fuzzy::{fallback_reference, find_possible_book};
pub use grammar::{parse_reference, ParseFailure};

/// An inclusive verse range inside one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseSpan {
    /// First verse.
    pub start: u32,
    /// Last verse (inclusive, never below `start`).
    pub end: u32,
}

impl VerseSpan {
    /// Verse numbers in ascending order.
    pub fn verses(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// A citation as recognised by the grammar.
///
/// `book` is the abbreviation exactly as typed; it is mapped to a canonical
/// code only during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParsedReference {
    /// `창1:1`
    Single {
        /// Raw abbreviation.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// Verse number.
        verse: u32,
    },
    /// `창1` (every verse of the chapter)
    Chapter {
        /// Raw abbreviation.
        book: String,
        /// Chapter number.
        chapter: u32,
    },
    /// `창1:1-3`
    VerseRange {
        /// Raw abbreviation.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// First verse.
        start_verse: u32,
        /// Last verse, at least `start_verse`.
        end_verse: u32,
    },
    /// `창1:1-2:3`
    ChapterRange {
        /// Raw abbreviation.
        book: String,
        /// First chapter.
        start_chapter: u32,
        /// First verse within `start_chapter`.
        start_verse: u32,
        /// Last chapter, at least `start_chapter`.
        end_chapter: u32,
        /// Last verse within `end_chapter`.
        end_verse: u32,
    },
    /// `창1:1,3` or `창1:1,3,5`, kept in the order typed
    MultiVerse {
        /// Raw abbreviation.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// Listed verses (two or three).
        verses: Vec<u32>,
    },
    /// `창1:1-3,5-7`, ranges kept in the order typed
    MultiRange {
        /// Raw abbreviation.
        book: String,
        /// Chapter number.
        chapter: u32,
        /// Listed ranges.
        ranges: Vec<VerseSpan>,
    },
}

impl ParsedReference {
    /// The raw book abbreviation.
    pub fn book(&self) -> &str {
        match self {
            Self::Single { book, .. }
            | Self::Chapter { book, .. }
            | Self::VerseRange { book, .. }
            | Self::ChapterRange { book, .. }
            | Self::MultiVerse { book, .. }
            | Self::MultiRange { book, .. } => book,
        }
    }

    /// Every chapter whose text is needed to expand this reference.
    pub fn chapters(&self) -> RangeInclusive<u32> {
        match *self {
            Self::ChapterRange { start_chapter, end_chapter, .. } => start_chapter..=end_chapter,
            Self::Single { chapter, .. }
            | Self::Chapter { chapter, .. }
            | Self::VerseRange { chapter, .. }
            | Self::MultiVerse { chapter, .. }
            | Self::MultiRange { chapter, .. } => chapter..=chapter,
        }
    }

    /// Short name of the reference shape, for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Chapter { .. } => "chapter",
            Self::VerseRange { .. } => "verseRange",
            Self::ChapterRange { .. } => "chapterRange",
            Self::MultiVerse { .. } => "multiVerse",
            Self::MultiRange { .. } => "multiRange",
        }
    }
}

/// One verse of output: display reference plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVerse {
    /// "BookName chapter:verse", using the full display name.
    pub reference: String,
    /// Verse text, trimmed.
    pub text: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
}

/// Strip all whitespace and fold full-width/typographic separators to ASCII.
pub fn normalize_query(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '：' => ':',
            '，' => ',',
            '–' | '—' | '－' | '~' | '〜' | '～' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn normalize_strips_whitespace() {
        assert_eq!(normalize_query("  창 1 : 1 "), "창1:1");
        assert_eq!(normalize_query("Gen\t1:1 -\n3"), "Gen1:1-3");
    }

    #[test]
    fn normalize_folds_separators() {
        assert_eq!(normalize_query("창1：1~3，5–7"), "창1:1-3,5-7");
    }

    #[test]
    fn chapters_needed() {
        let r = ParsedReference::ChapterRange {
            book: "창".into(),
            start_chapter: 1,
            start_verse: 30,
            end_chapter: 3,
            end_verse: 2,
        };
        assert_eq!(r.chapters(), 1..=3);
        assert_eq!(r.book(), "창");
        assert_eq!(r.kind(), "chapterRange");
    }

    #[test]
    fn serializes_with_type_tag() {
        let r = ParsedReference::VerseRange {
            book: "요".into(),
            chapter: 3,
            start_verse: 16,
            end_verse: 18,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "verseRange");
        assert_eq!(json["startVerse"], 16);
    }
}
