//! Input handling abstractions.
//!
//! Key events are turned into [`InputResult`]s by small handlers so the
//! finder's key map can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Switch to the next language.
    CycleLanguage,
    /// Copy the current results to the clipboard.
    CopyResults,
    /// Dismiss whatever is showing, or cancel the running query.
    Dismiss,
    /// Resolve the query buffer.
    Submit,
    /// Re-run the selected history entry.
    RecallHistory,
    /// Move the history selection by the given offset.
    MoveHistory(isize),
    /// Scroll the results by the given number of rows.
    ScrollResults(isize),
    /// Focus should change.
    FocusChange(Focus),
}

/// Which pane receives plain keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input line.
    #[default]
    Query,
    /// The history list.
    History,
}

/// Context passed to input handlers.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Focused pane.
    pub focus: Focus,
    /// Whether help is currently shown.
    pub show_help: bool,
    /// Number of history entries.
    pub history_len: usize,
}

/// Trait for handling keyboard input.
pub trait InputHandler {
    /// Handle a key event.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Shortcuts that work regardless of focus.
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => InputResult::Quit,
            KeyCode::Char('y') if ctrl => InputResult::CopyResults,
            KeyCode::F(1) => InputResult::ToggleHelp,
            KeyCode::Esc if ctx.show_help => InputResult::ToggleHelp,
            KeyCode::Esc => InputResult::Dismiss,
            KeyCode::Tab => InputResult::CycleLanguage,
            KeyCode::PageDown => InputResult::ScrollResults(10),
            KeyCode::PageUp => InputResult::ScrollResults(-10),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for the history pane.
#[derive(Debug, Default)]
pub struct HistoryHandler;

impl InputHandler for HistoryHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if ctx.focus != Focus::History {
            return InputResult::Ignored;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => InputResult::MoveHistory(1),
            KeyCode::Up | KeyCode::Char('k') => InputResult::MoveHistory(-1),
            KeyCode::Enter => InputResult::RecallHistory,
            KeyCode::Left | KeyCode::BackTab => InputResult::FocusChange(Focus::Query),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "HistoryHandler"
    }
}

/// Single-line query editor.
///
/// The cursor is a char index, so wide Hangul input edits correctly.
#[derive(Debug, Default, Clone)]
pub struct QueryBuffer {
    text: String,
    cursor: usize,
}

impl QueryBuffer {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    /// Replace the text and put the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }
}

impl InputHandler for QueryBuffer {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.clear();
                    InputResult::Consumed
                }
                _ => InputResult::Ignored,
            };
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                if ctx.focus == Focus::Query {
                    InputResult::Consumed
                } else {
                    InputResult::FocusChange(Focus::Query)
                }
            }
            KeyCode::Backspace => {
                self.backspace();
                InputResult::Consumed
            }
            KeyCode::Delete => {
                self.delete();
                InputResult::Consumed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputResult::Consumed
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                InputResult::Consumed
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputResult::Consumed
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                InputResult::Consumed
            }
            KeyCode::Enter => InputResult::Submit,
            KeyCode::Down if ctx.history_len > 0 => InputResult::FocusChange(Focus::History),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "QueryBuffer"
    }
}
