//! Reference grammar: priority-ordered citation matchers.
//!
//! Each matcher recognises one citation shape on a normalized query. They
//! are tried in a fixed order and the first one that claims the input wins,
//! so multi-component shapes must come before the looser bare-chapter form.
//!
//! The book component is a run of non-digits, optionally preceded by a single
//! `1`-`3` (for "1Co", "2S", "3Jn"). Anything else starting with a digit is
//! left to the fuzzy fallback.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use super::{ParsedReference, VerseSpan};

/// Why the grammar produced no reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// No matcher recognised the shape of the input.
    #[error("no reference pattern matched")]
    NoMatch,
    /// A matcher recognised the shape but a number was zero or too large.
    #[error("'{0}' is not a valid chapter or verse number")]
    InvalidNumber(String),
    /// A range ends before it starts.
    #[error("range {start}-{end} runs backwards")]
    ReversedRange {
        /// Range start as typed.
        start: String,
        /// Range end as typed.
        end: String,
    },
}

type Extracted = Result<ParsedReference, ParseFailure>;

/// A matcher returns `None` when it does not claim the input.
type Matcher = fn(&str) -> Option<Extracted>;

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        #[allow(clippy::expect_used)]
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!($re, book = BOOK)).expect(concat!("valid regex: ", stringify!($name)))
        });
    };
}

const BOOK: &str = r"([1-3]?[^0-9]+?)";

pattern!(RE_SINGLE, r"^{book}([0-9]+):([0-9]+)$");
pattern!(RE_VERSE_RANGE, r"^{book}([0-9]+):([0-9]+)-([0-9]+)$");
pattern!(RE_CHAPTER_RANGE, r"^{book}([0-9]+):([0-9]+)-([0-9]+):([0-9]+)$");
pattern!(RE_MULTI_RANGE, r"^{book}([0-9]+):([0-9]+)-([0-9]+),([0-9]+)-([0-9]+)$");
pattern!(RE_MULTI_VERSE_3, r"^{book}([0-9]+):([0-9]+),([0-9]+),([0-9]+)$");
pattern!(RE_MULTI_VERSE_2, r"^{book}([0-9]+):([0-9]+),([0-9]+)$");
pattern!(RE_SPACED_SINGLE, r"^{book}\s*([0-9]+)\s*:\s*([0-9]+)$");
pattern!(RE_DIGIT_RUN, r"^{book}([0-9]+)([0-9]+)$");
pattern!(RE_CHAPTER, r"^{book}([0-9]+)$");

/// Matchers in priority order.
const MATCHERS: [(&str, Matcher); 9] = [
    ("single", single),
    ("verseRange", verse_range),
    ("chapterRange", chapter_range),
    ("multiRange", multi_range),
    ("multiVerse3", multi_verse_3),
    ("multiVerse2", multi_verse_2),
    ("spacedSingle", spaced_single),
    ("digitRun", digit_run),
    ("chapter", chapter),
];

/// Parse a normalized query into exactly one reference.
///
/// Returns [`ParseFailure::NoMatch`] when no matcher claims the input; the
/// caller is expected to try the fuzzy fallback next.
pub fn parse_reference(normalized: &str) -> Result<ParsedReference, ParseFailure> {
    for (name, matcher) in MATCHERS {
        if let Some(extracted) = matcher(normalized) {
            tracing::trace!(pattern = name, input = normalized, "grammar matched");
            return extracted;
        }
    }
    Err(ParseFailure::NoMatch)
}

fn book(caps: &Captures<'_>) -> String {
    caps.get(1).map_or_else(String::new, |m| m.as_str().trim().to_string())
}

/// Positive chapter/verse number from a capture group.
fn number(caps: &Captures<'_>, group: usize) -> Result<u32, ParseFailure> {
    let text = caps.get(group).map_or("", |m| m.as_str());
    match text.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseFailure::InvalidNumber(text.to_string())),
    }
}

fn span(caps: &Captures<'_>, start_group: usize, end_group: usize) -> Result<VerseSpan, ParseFailure> {
    let start = number(caps, start_group)?;
    let end = number(caps, end_group)?;
    if start > end {
        return Err(ParseFailure::ReversedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(VerseSpan { start, end })
}

fn single(input: &str) -> Option<Extracted> {
    RE_SINGLE.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::Single {
            book: book(&caps),
            chapter: number(&caps, 2)?,
            verse: number(&caps, 3)?,
        })
    })
}

fn verse_range(input: &str) -> Option<Extracted> {
    RE_VERSE_RANGE.captures(input).map(|caps| -> Extracted {
        let chapter = number(&caps, 2)?;
        let verses = span(&caps, 3, 4)?;
        Ok(ParsedReference::VerseRange {
            book: book(&caps),
            chapter,
            start_verse: verses.start,
            end_verse: verses.end,
        })
    })
}

fn chapter_range(input: &str) -> Option<Extracted> {
    RE_CHAPTER_RANGE.captures(input).map(|caps| -> Extracted {
        let start_chapter = number(&caps, 2)?;
        let start_verse = number(&caps, 3)?;
        let end_chapter = number(&caps, 4)?;
        let end_verse = number(&caps, 5)?;
        if (end_chapter, end_verse) < (start_chapter, start_verse) {
            return Err(ParseFailure::ReversedRange {
                start: format!("{start_chapter}:{start_verse}"),
                end: format!("{end_chapter}:{end_verse}"),
            });
        }
        Ok(ParsedReference::ChapterRange {
            book: book(&caps),
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        })
    })
}

fn multi_range(input: &str) -> Option<Extracted> {
    RE_MULTI_RANGE.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::MultiRange {
            book: book(&caps),
            chapter: number(&caps, 2)?,
            ranges: vec![span(&caps, 3, 4)?, span(&caps, 5, 6)?],
        })
    })
}

fn multi_verse_3(input: &str) -> Option<Extracted> {
    RE_MULTI_VERSE_3.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::MultiVerse {
            book: book(&caps),
            chapter: number(&caps, 2)?,
            verses: vec![number(&caps, 3)?, number(&caps, 4)?, number(&caps, 5)?],
        })
    })
}

fn multi_verse_2(input: &str) -> Option<Extracted> {
    RE_MULTI_VERSE_2.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::MultiVerse {
            book: book(&caps),
            chapter: number(&caps, 2)?,
            verses: vec![number(&caps, 3)?, number(&caps, 4)?],
        })
    })
}

fn spaced_single(input: &str) -> Option<Extracted> {
    RE_SPACED_SINGLE.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::Single {
            book: book(&caps),
            chapter: number(&caps, 2)?,
            verse: number(&caps, 3)?,
        })
    })
}

/// `창11` reads as chapter 1, verse 1: the last digit is the verse and the
/// rest the chapter. Ambiguous for multi-digit verses ("창316" is 31:6, not
/// 3:16). A split that would yield a zero declines so "창10" stays chapter 10.
fn digit_run(input: &str) -> Option<Extracted> {
    let caps = RE_DIGIT_RUN.captures(input)?;
    let chapter = number(&caps, 2).ok()?;
    let verse = number(&caps, 3).ok()?;
    Some(Ok(ParsedReference::Single { book: book(&caps), chapter, verse }))
}

fn chapter(input: &str) -> Option<Extracted> {
    RE_CHAPTER.captures(input).map(|caps| -> Extracted {
        Ok(ParsedReference::Chapter {
            book: book(&caps),
            chapter: number(&caps, 2)?,
        })
    })
}
