//! Verse set expansion.
//!
//! Turns a parsed reference plus the verse texts of its chapter(s) into
//! ordered output rows. Verse numbers past the end of a chapter are skipped
//! silently, as are verses whose text is blank (sparse datasets leave gaps);
//! free-text citations are treated as best effort.

use std::collections::BTreeMap;

use super::{ParsedReference, ResolvedVerse};

/// Verse texts for one or more chapters of a single book.
///
/// Index 0 of each chapter's list is verse 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterSet {
    chapters: BTreeMap<u32, Vec<String>>,
}

impl ChapterSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a chapter's verses.
    pub fn insert(&mut self, chapter: u32, verses: Vec<String>) {
        self.chapters.insert(chapter, verses);
    }

    /// Builder form of [`ChapterSet::insert`].
    #[must_use]
    pub fn with_chapter(mut self, chapter: u32, verses: Vec<String>) -> Self {
        self.insert(chapter, verses);
        self
    }

    /// Verses of a chapter, if present.
    pub fn get(&self, chapter: u32) -> Option<&[String]> {
        self.chapters.get(&chapter).map(Vec::as_slice)
    }

    /// Number of chapters held.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether no chapter is held.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// Expand a reference into `ResolvedVerse` rows.
///
/// `book_name` is the full display name used in every reference string.
/// A chapter missing from `chapters` contributes nothing.
pub fn expand(reference: &ParsedReference, book_name: &str, chapters: &ChapterSet) -> Vec<ResolvedVerse> {
    let mut out = Vec::new();
    let mut emit = |chapter: u32, verse: u32| {
        if let Some(row) = verse_row(book_name, chapters, chapter, verse) {
            out.push(row);
        }
    };

    match reference {
        ParsedReference::Single { chapter, verse, .. } => emit(*chapter, *verse),
        ParsedReference::Chapter { chapter, .. } => {
            for verse in 1..=chapter_len(chapters, *chapter) {
                emit(*chapter, verse);
            }
        }
        ParsedReference::VerseRange { chapter, start_verse, end_verse, .. } => {
            let last = (*end_verse).min(chapter_len(chapters, *chapter));
            for verse in *start_verse..=last {
                emit(*chapter, verse);
            }
        }
        ParsedReference::ChapterRange { start_chapter, start_verse, end_chapter, end_verse, .. } => {
            for chapter in *start_chapter..=*end_chapter {
                let first = if chapter == *start_chapter { *start_verse } else { 1 };
                let len = chapter_len(chapters, chapter);
                let last = if chapter == *end_chapter { (*end_verse).min(len) } else { len };
                for verse in first..=last {
                    emit(chapter, verse);
                }
            }
        }
        ParsedReference::MultiVerse { chapter, verses, .. } => {
            for verse in verses {
                emit(*chapter, *verse);
            }
        }
        ParsedReference::MultiRange { chapter, ranges, .. } => {
            let len = chapter_len(chapters, *chapter);
            for range in ranges {
                for verse in range.start..=range.end.min(len) {
                    emit(*chapter, verse);
                }
            }
        }
    }

    out
}

fn chapter_len(chapters: &ChapterSet, chapter: u32) -> u32 {
    chapters
        .get(chapter)
        .map_or(0, |verses| u32::try_from(verses.len()).unwrap_or(u32::MAX))
}

fn verse_row(book_name: &str, chapters: &ChapterSet, chapter: u32, verse: u32) -> Option<ResolvedVerse> {
    let index = usize::try_from(verse.checked_sub(1)?).ok()?;
    let text = chapters.get(chapter)?.get(index)?;
    if text.trim().is_empty() {
        return None;
    }
    // Normalize whitespace in source text
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(ResolvedVerse {
        reference: format!("{book_name} {chapter}:{verse}"),
        text,
        chapter,
        verse,
    })
}
