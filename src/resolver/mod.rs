//! Resolution pipeline and sessions.
//!
//! [`Resolver`] runs one query through parse, book lookup, chapter fetch and
//! expansion. [`Session`] wraps it with the history and the
//! last-request-wins bookkeeping an interactive front end needs.

pub mod history;

use std::fmt;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::Instrument;

pub use history::{History, HistoryEntry};

use crate::bible::{
    expand, fallback_reference, normalize_query, parse_reference, BookCatalog, ChapterSet, Language,
    ParseFailure, ParsedReference, ResolvedVerse,
};
use crate::constants::bible::MAX_CHAPTERS_PER_BOOK;
use crate::error::ResolveError;
use crate::services::suggest::BookSuggester;
use crate::services::VerseProvider;
use crate::types::{BookCode, RequestId};

/// Pipeline stage of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Nothing in flight.
    Idle,
    /// Matching the query against the grammar and the fuzzy fallback.
    Parsing,
    /// Mapping the typed abbreviation to a canonical code.
    BookLookup,
    /// Waiting on the verse provider.
    ContentFetch,
    /// Building output rows.
    Expanding,
    /// Finished with results.
    Done,
    /// Finished with an error.
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Parsing => "parsing",
            Self::BookLookup => "book lookup",
            Self::ContentFetch => "content fetch",
            Self::Expanding => "expanding",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl ResolveError {
    /// The stage this error ends a resolution in.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::EmptyQuery | Self::UnrecognizedFormat { .. } => Stage::Parsing,
            Self::UnsupportedBook { .. } => Stage::BookLookup,
            Self::ChapterNotFound { .. } | Self::Provider { .. } => Stage::ContentFetch,
        }
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The normalized query.
    pub query: String,
    /// Language the query was resolved in.
    pub language: Language,
    /// The reference as parsed.
    pub reference: ParsedReference,
    /// Canonical code of the book.
    pub book: BookCode,
    /// Display name used in every verse reference.
    pub book_name: String,
    /// Verses in output order. May be empty when every requested verse lies
    /// past the end of its chapter.
    pub verses: Vec<ResolvedVerse>,
}

impl Resolution {
    /// One "reference text" line per verse, for copying.
    pub fn to_plain_text(&self) -> String {
        self.verses
            .iter()
            .map(|v| format!("{} {}", v.reference, v.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Stateless resolution pipeline.
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<BookCatalog>,
    provider: Arc<dyn VerseProvider>,
}

impl Resolver {
    /// Resolver over a catalog and a verse provider.
    pub fn new(catalog: Arc<BookCatalog>, provider: Arc<dyn VerseProvider>) -> Self {
        Self { catalog, provider }
    }

    /// The book catalog in use.
    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Name of the verse provider in use.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Parse a raw query without fetching anything.
    pub fn parse(&self, query: &str, language: Language) -> Result<ParsedReference, ResolveError> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        let unrecognized = || ResolveError::UnrecognizedFormat {
            query: normalized.clone(),
            examples: language.examples().to_string(),
        };

        match parse_reference(&normalized) {
            Ok(reference) => Ok(reference),
            Err(ParseFailure::NoMatch) => self
                .catalog
                .table(language)
                .and_then(|table| fallback_reference(&normalized, table))
                .ok_or_else(unrecognized),
            Err(reason) => {
                tracing::debug!(query = %normalized, %reason, "grammar rejected numbers");
                Err(unrecognized())
            }
        }
    }

    /// Resolve a raw query into verses.
    pub async fn resolve(&self, query: &str, language: Language) -> Result<Resolution, ResolveError> {
        tracing::debug!(stage = %Stage::Parsing, query, %language);
        let reference = self.parse(query, language)?;

        tracing::debug!(stage = %Stage::BookLookup, kind = reference.kind(), book = reference.book());
        let book = self.lookup_book(&reference, language)?;

        tracing::debug!(stage = %Stage::ContentFetch, %book, chapters = ?reference.chapters());
        let chapters = self.fetch_chapters(language, &book, &reference).await?;

        tracing::debug!(stage = %Stage::Expanding, chapters = chapters.len());
        let book_name = self.catalog.code_to_full_name(language, &book);
        let verses = expand(&reference, &book_name, &chapters);

        tracing::debug!(stage = %Stage::Done, verses = verses.len());
        Ok(Resolution {
            query: normalize_query(query),
            language,
            reference,
            book,
            book_name,
            verses,
        })
    }

    fn lookup_book(&self, reference: &ParsedReference, language: Language) -> Result<BookCode, ResolveError> {
        let typed = reference.book();
        self.catalog.abbreviation_to_code(language, typed).ok_or_else(|| {
            let suggestions = self
                .catalog
                .table(language)
                .map(|table| BookSuggester::default().suggest(typed, table))
                .unwrap_or_default();
            ResolveError::UnsupportedBook { book: typed.to_string(), suggestions }
        })
    }

    /// Fetch every chapter the reference touches, concurrently.
    ///
    /// Chapters past the longest book are refused before any request goes out.
    async fn fetch_chapters(
        &self,
        language: Language,
        book: &BookCode,
        reference: &ParsedReference,
    ) -> Result<ChapterSet, ResolveError> {
        let last = *reference.chapters().end();
        if last > MAX_CHAPTERS_PER_BOOK {
            tracing::debug!(%book, chapter = last, "chapter beyond any book");
            return Err(ResolveError::ChapterNotFound { book: book.clone(), chapter: last });
        }

        let fetches = reference.chapters().map(|chapter| {
            let provider = Arc::clone(&self.provider);
            async move {
                let verses = provider.fetch_chapter(language, book, chapter).await?;
                Ok::<_, crate::error::Error>((chapter, verses))
            }
        });

        let fetched = try_join_all(fetches).await.map_err(|e| {
            tracing::warn!(provider = self.provider.name(), %book, error = %e, "chapter fetch failed");
            ResolveError::from(e)
        })?;

        Ok(fetched
            .into_iter()
            .fold(ChapterSet::new(), |set, (chapter, verses)| set.with_chapter(chapter, verses)))
    }
}

/// A request handed out by [`Session::begin`], not yet run.
pub struct PendingRequest {
    id: RequestId,
    query: String,
    language: Language,
    resolver: Resolver,
}

impl PendingRequest {
    /// Id of this request.
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// The query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run the pipeline. Dropping the future abandons the request.
    pub async fn run(self) -> Completed {
        let span = tracing::debug_span!("resolve", id = %self.id);
        let outcome = self.resolver.resolve(&self.query, self.language).instrument(span).await;
        Completed {
            id: self.id,
            query: self.query,
            language: self.language,
            outcome,
        }
    }
}

/// A finished request, waiting to be handed back to its session.
#[derive(Debug, Clone)]
pub struct Completed {
    /// Id the request was issued with.
    pub id: RequestId,
    /// The query as typed.
    pub query: String,
    /// Language it ran in.
    pub language: Language,
    /// What the pipeline produced.
    pub outcome: Result<Resolution, ResolveError>,
}

/// A resolver plus history, delivering only the newest request's outcome.
pub struct Session {
    resolver: Resolver,
    history: History,
    latest: RequestId,
    in_flight: Option<RequestId>,
}

impl Session {
    /// New session with empty history.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            history: History::default(),
            latest: RequestId::default(),
            in_flight: None,
        }
    }

    /// Start a request. Any request still in flight becomes stale.
    ///
    /// A blank query is rejected here and leaves the session untouched.
    pub fn begin(&mut self, query: &str, language: Language) -> Result<PendingRequest, ResolveError> {
        if normalize_query(query).is_empty() {
            return Err(ResolveError::EmptyQuery);
        }
        if let Some(previous) = self.in_flight {
            tracing::debug!(%previous, "superseding request");
        }
        self.latest = self.latest.next();
        self.in_flight = Some(self.latest);
        Ok(PendingRequest {
            id: self.latest,
            query: query.to_string(),
            language,
            resolver: self.resolver.clone(),
        })
    }

    /// Accept a finished request.
    ///
    /// Returns `None` for a stale completion, which is discarded without
    /// touching the history.
    pub fn complete(&mut self, done: Completed) -> Option<Result<Resolution, ResolveError>> {
        if self.in_flight != Some(done.id) {
            tracing::warn!(id = %done.id, latest = %self.latest, "dropping stale completion");
            return None;
        }
        self.in_flight = None;
        self.record(&done.query, &done.outcome);
        Some(done.outcome)
    }

    /// Begin, run and complete a request in one call.
    pub async fn resolve(&mut self, query: &str, language: Language) -> Result<Resolution, ResolveError> {
        let pending = self.begin(query, language)?;
        let done = pending.run().await;
        // `&mut self` is held across the await, so nothing can supersede it
        self.in_flight = None;
        self.record(&done.query, &done.outcome);
        done.outcome
    }

    /// Abandon whatever is in flight; its completion will be dropped.
    pub fn cancel(&mut self) {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(%id, "request cancelled");
        }
    }

    /// Whether a request is in flight.
    ///
    /// The session only sees requests start and complete. The pipeline's own
    /// stage is logged by [`Resolver::resolve`] and reported by
    /// [`ResolveError::stage`] on failure.
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// History of successful queries, newest first.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The underlying resolver.
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn record(&mut self, query: &str, outcome: &Result<Resolution, ResolveError>) {
        match outcome {
            Ok(resolution) => {
                tracing::debug!(query, verses = resolution.verses.len(), "recording history");
                self.history.push(HistoryEntry::now(query));
            }
            Err(e) => tracing::debug!(query, stage = %e.stage(), error = %e, "resolution failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::services::static_provider::StaticProvider;

    fn resolver() -> Resolver {
        Resolver::new(
            BookCatalog::shared_standard(),
            Arc::new(StaticProvider::with_sample_data().unwrap()),
        )
    }

    #[test]
    fn blank_query_is_empty() {
        assert_eq!(resolver().parse("  \t", Language::Kor), Err(ResolveError::EmptyQuery));
    }

    #[test]
    fn garbage_is_unrecognized_with_examples() {
        let err = resolver().parse("hello", Language::Kor).unwrap_err();
        assert!(matches!(err, ResolveError::UnrecognizedFormat { .. }));
        assert!(err.to_string().contains("창1:1"));
        assert_eq!(err.stage(), Stage::Parsing);
    }

    #[test]
    fn zero_verse_is_unrecognized() {
        let err = resolver().parse("창1:0", Language::Kor).unwrap_err();
        assert!(matches!(err, ResolveError::UnrecognizedFormat { .. }));
    }

    #[tokio::test]
    async fn unknown_book_suggests_alternatives() {
        let err = resolver().resolve("창세기1:1", Language::Kor).await.unwrap_err();
        let ResolveError::UnsupportedBook { book, suggestions } = &err else {
            panic!("expected UnsupportedBook, got {err:?}");
        };
        assert_eq!(book, "창세기");
        assert_eq!(suggestions.first().map(String::as_str), Some("창"));
        assert_eq!(err.stage(), Stage::BookLookup);
    }

    #[tokio::test]
    async fn missing_chapter_reports_content_fetch() {
        let err = resolver().resolve("창2:1", Language::Kor).await.unwrap_err();
        assert!(matches!(err, ResolveError::ChapterNotFound { chapter: 2, .. }));
        assert_eq!(err.stage(), Stage::ContentFetch);
    }

    #[tokio::test]
    async fn resolution_carries_book_details() {
        let resolution = resolver().resolve("창 1:1-3", Language::Kor).await.unwrap();
        assert_eq!(resolution.query, "창1:1-3");
        assert_eq!(resolution.book, BookCode::new("GEN"));
        assert_eq!(resolution.book_name, "창세기");
        assert_eq!(resolution.verses.len(), 3);
        assert!(resolution.to_plain_text().starts_with("창세기 1:1 "));
    }

    #[tokio::test]
    async fn stale_completion_is_dropped() {
        let mut session = Session::new(resolver());
        let first = session.begin("창1:1", Language::Kor).unwrap();
        let second = session.begin("요3:16", Language::Kor).unwrap();
        assert!(second.id() > first.id());

        let first_done = first.run().await;
        assert!(session.complete(first_done).is_none());
        assert!(session.is_busy());

        let second_done = second.run().await;
        let outcome = session.complete(second_done).unwrap().unwrap();
        assert_eq!(outcome.verses[0].reference, "요한복음 3:16");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().get(0).unwrap().query, "요3:16");
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn cancelled_request_records_nothing() {
        let mut session = Session::new(resolver());
        let pending = session.begin("창1:1", Language::Kor).unwrap();
        session.cancel();
        let done = pending.run().await;
        assert!(session.complete(done).is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn failures_are_not_recorded() {
        let mut session = Session::new(resolver());
        assert!(session.resolve("창99:1", Language::Kor).await.is_err());
        assert_eq!(session.resolve("", Language::Kor).await, Err(ResolveError::EmptyQuery));
        assert!(session.history().is_empty());
        assert!(!session.is_busy());
    }
}
