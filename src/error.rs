//! Application error types.
//!
//! `Error` covers infrastructure failures (IO, network, provider APIs,
//! configuration). `ResolveError` is the caller-facing taxonomy a resolution
//! can end in; the orchestrator converts the former into the latter.

use thiserror::Error;

use crate::types::BookCode;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Scripture API error with status context
    #[error("Scripture API error: {message}")]
    Api {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// File or payload parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// The provider has no such chapter for the book/version
    #[error("Chapter {chapter} of {book} not found")]
    ChapterNotFound {
        /// Canonical book code that was requested.
        book: BookCode,
        /// Chapter number that was requested.
        chapter: u32,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a scripture API error with HTTP status and a matching hint
    pub fn api_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check the SCRIPTURE_API_KEY environment variable"),
            403 => Some("Your API key may not have access to this Bible version"),
            404 => Some("The requested book or chapter does not exist in this version"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Scripture API server error - try again later"),
            _ => None,
        };
        Self::Api {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a chapter-not-found error
    pub fn chapter_not_found(book: &BookCode, chapter: u32) -> Self {
        Self::ChapterNotFound { book: book.clone(), chapter }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

/// Why a resolution ended without results.
///
/// Every variant is a value handed back to the caller; nothing in the
/// resolution pipeline panics or leaks a provider error unconverted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The query was blank. Callers treat this as a no-op.
    #[error("Empty query")]
    EmptyQuery,

    /// Neither the grammar nor the fuzzy fallback recognised the query.
    #[error("Unrecognized reference format: {query:?}. Try e.g. {examples}")]
    UnrecognizedFormat {
        /// The normalized query.
        query: String,
        /// Example citations for the selected language.
        examples: String,
    },

    /// The book part was isolated but has no code in the language's table.
    #[error("Unsupported book abbreviation {book:?}{}", suggestion_suffix(.suggestions))]
    UnsupportedBook {
        /// The abbreviation as typed.
        book: String,
        /// Close abbreviations the user may have meant.
        suggestions: Vec<String>,
    },

    /// The provider has no such chapter.
    #[error("Chapter {chapter} of {book} not found")]
    ChapterNotFound {
        /// Canonical book code.
        book: BookCode,
        /// Requested chapter.
        chapter: u32,
    },

    /// The provider failed for another reason (network, API, data file).
    #[error("Verse provider failed: {message}")]
    Provider {
        /// The provider's own error message.
        message: String,
    },
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

impl From<Error> for ResolveError {
    fn from(e: Error) -> Self {
        match e {
            Error::ChapterNotFound { book, chapter } => Self::ChapterNotFound { book, chapter },
            other => Self::Provider { message: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn api_status_provides_hints() {
        let err = Error::api_status("Unauthorized", 401);
        match err {
            Error::Api { hint: Some(h), .. } => {
                assert!(h.contains("SCRIPTURE_API_KEY"));
            }
            _ => panic!("Expected Api error with hint"),
        }
    }

    #[test]
    fn chapter_not_found_keeps_its_kind() {
        let err: ResolveError = Error::chapter_not_found(&BookCode::new("GEN"), 51).into();
        assert_eq!(
            err,
            ResolveError::ChapterNotFound { book: BookCode::new("GEN"), chapter: 51 }
        );
    }

    #[test]
    fn other_errors_become_provider_errors() {
        let err: ResolveError = Error::Network("connection refused".into()).into();
        match err {
            ResolveError::Provider { message } => assert!(message.contains("connection refused")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unsupported_book_lists_suggestions() {
        let err = ResolveError::UnsupportedBook {
            book: "창세".into(),
            suggestions: vec!["창".into()],
        };
        assert!(err.to_string().ends_with("(did you mean 창?)"));
    }
}
