//! Query history for one session.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::session::HISTORY_CAPACITY;

/// A successfully resolved query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The query as the user typed it.
    pub query: String,
    /// When the resolution completed (serialized as ISO-8601).
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn now(query: impl Into<String>) -> Self {
        Self { query: query.into(), timestamp: Utc::now() }
    }
}

/// Bounded history, newest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    /// History keeping at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Record an entry at the front, evicting the oldest past capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entry at `index` (0 = newest).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Owned copy of the entries, newest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn newest_first_and_capped() {
        let mut history = History::with_capacity(3);
        for q in ["a", "b", "c", "d"] {
            history.push(HistoryEntry::now(q));
        }
        let queries: Vec<_> = history.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, ["d", "c", "b"]);
        assert_eq!(history.get(0).unwrap().query, "d");
    }

    #[test]
    fn default_capacity_is_ten() {
        let mut history = History::default();
        for i in 0..12 {
            history.push(HistoryEntry::now(format!("q{i}")));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(9).unwrap().query, "q2");
    }

    #[test]
    fn timestamp_serializes_as_iso8601() {
        let entry = HistoryEntry::now("창1:1");
        let json = serde_json::to_value(&entry).unwrap();
        let stamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(json["query"], "창1:1");
    }
}
