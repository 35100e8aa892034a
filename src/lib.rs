//! `versefinder` - multi-script scripture reference resolver.
//!
//! Turns free-form citations such as `창1:1-3,5-7`, `Jn3:16` or `1Co13:4` into
//! the verses they name, in Korean, Spanish or English. The [`resolver`]
//! pipeline sits on the book tables and grammar in [`bible`] and fetches
//! chapter text through a [`services::VerseProvider`].

pub mod app;
pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod resolver;
pub mod services;
pub mod types;
pub mod ui;
