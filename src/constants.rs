//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Resolution session constants.
pub mod session {
    /// Number of history entries kept, newest first.
    pub const HISTORY_CAPACITY: usize = 10;
}

/// Bounds on chapter and verse numbers.
pub mod bible {
    /// No book has more chapters (Psalms has 150).
    pub const MAX_CHAPTERS_PER_BOOK: u32 = 150;

    /// No chapter has more verses (Psalm 119 has 176).
    pub const MAX_VERSES_PER_CHAPTER: usize = 200;
}

/// Scripture API constants.
pub mod api {
    /// Query string for chapter text with inline `[n]` verse markers.
    pub const CHAPTER_TEXT_QUERY: &[(&str, &str)] = &[
        ("content-type", "text"),
        ("include-verse-numbers", "true"),
        ("include-notes", "false"),
        ("include-titles", "false"),
        ("include-chapter-numbers", "false"),
    ];
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 10;
}

/// UI layout constants.
pub mod ui {
    /// Width of the history pane in percent.
    pub const HISTORY_PANE_PERCENT: u16 = 30;

    /// How long a status message (e.g. "Copied") stays visible, in ticks.
    pub const STATUS_TICKS: u16 = 40;
}
