//! Core type definitions for compile-time safety.
//!
//! Newtype wrappers keep canonical book codes and request identifiers from
//! being mixed up with raw abbreviations and other plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical book code shared across languages (e.g. `GEN`, `1CO`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookCode(pub String);

impl BookCode {
    /// Create a new `BookCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for BookCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of one resolution request within a session.
///
/// Ids increase monotonically; only the newest id may deliver a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_code_round_trips_through_str() {
        let code = BookCode::from("1CO");
        assert_eq!(code.as_str(), "1CO");
        assert_eq!(code.to_string(), "1CO");
    }

    #[test]
    fn request_ids_increase() {
        let first = RequestId::default();
        assert!(first.next() > first);
        assert_eq!(first.next().to_string(), "#1");
    }
}
