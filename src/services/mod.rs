//! Services behind the resolver.
//!
//! Verse-content providers and book suggestions, kept apart from the
//! resolution pipeline so each can be swapped and tested alone.

pub mod api_bible;
pub mod file_provider;
pub mod scripture;
pub mod static_provider;
pub mod suggest;

pub use scripture::{from_config, VerseProvider};
