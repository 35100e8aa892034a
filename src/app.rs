//! Interactive finder state.
//!
//! Queries run on tokio tasks and report back over an mpsc channel. A new
//! query aborts the task still running and the session drops any completion
//! that is no longer the newest, so only the last query ever shows.

use arboard::Clipboard;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bible::Language;
use crate::constants::{async_tasks::CHANNEL_BUFFER_SIZE, ui::STATUS_TICKS};
use crate::error::ResolveError;
use crate::input::{Focus, GlobalHandler, HistoryHandler, InputContext, InputHandler, InputResult, QueryBuffer};
use crate::resolver::{Completed, Resolution, Resolver, Session};

/// Messages from background tasks.
#[derive(Debug)]
pub enum AppUpdate {
    /// A query finished, possibly after being superseded.
    Resolved(Completed),
}

/// Finder application state.
pub struct App {
    /// Query being edited.
    pub query: QueryBuffer,
    /// Selected language.
    pub language: Language,
    /// Focused pane.
    pub focus: Focus,
    /// Latest successful resolution.
    pub results: Option<Resolution>,
    /// First result row shown.
    pub results_scroll: usize,
    /// Selection in the history pane.
    pub history_list_state: ListState,
    /// Error shown in an overlay until dismissed.
    pub error_message: Option<String>,
    /// Transient status line and its remaining ticks.
    pub status_message: Option<(String, u16)>,
    /// Whether help is shown.
    pub show_help: bool,
    session: Session,
    should_quit: bool,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
    task: Option<JoinHandle<()>>,
}

impl App {
    /// New finder over a resolver.
    pub fn new(resolver: Resolver, language: Language) -> Self {
        let (async_task_tx, async_task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            query: QueryBuffer::default(),
            language,
            focus: Focus::Query,
            results: None,
            results_scroll: 0,
            history_list_state: ListState::default(),
            error_message: None,
            status_message: None,
            show_help: false,
            session: Session::new(resolver),
            should_quit: false,
            async_task_tx,
            async_task_rx,
            task: None,
        }
    }

    /// The resolution session (history, busy state).
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a query is running.
    pub const fn is_loading(&self) -> bool {
        self.session.is_busy()
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Route a key event through the handlers.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = InputContext {
            focus: self.focus,
            show_help: self.show_help,
            history_len: self.session.history().len(),
        };

        let mut result = GlobalHandler.handle(key, &ctx);
        if result == InputResult::Ignored && !self.show_help && self.error_message.is_none() {
            result = HistoryHandler.handle(key, &ctx);
            if result == InputResult::Ignored {
                result = self.query.handle(key, &ctx);
            }
        }
        self.apply(result);
    }

    fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Consumed | InputResult::Ignored => {}
            InputResult::Quit => self.quit(),
            InputResult::ToggleHelp => self.show_help = !self.show_help,
            InputResult::CycleLanguage => {
                self.language = self.language.next();
                self.set_status(format!("Language: {} ({})", self.language, self.language.version_name()));
            }
            InputResult::CopyResults => self.copy_results(),
            InputResult::Dismiss => self.dismiss(),
            InputResult::Submit => self.submit(),
            InputResult::RecallHistory => self.recall_history(),
            InputResult::MoveHistory(delta) => self.move_history(delta),
            InputResult::ScrollResults(delta) => self.scroll_results(delta),
            InputResult::FocusChange(focus) => self.set_focus(focus),
        }
    }

    fn dismiss(&mut self) {
        if self.error_message.take().is_some() {
            return;
        }
        if self.session.is_busy() {
            self.abort_task();
            self.session.cancel();
            self.set_status("Cancelled");
            return;
        }
        if self.focus == Focus::History {
            self.set_focus(Focus::Query);
        } else {
            self.query.clear();
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::History if self.history_list_state.selected().is_none() => {
                self.history_list_state.select(Some(0));
            }
            Focus::Query => self.history_list_state.select(None),
            Focus::History => {}
        }
    }

    fn move_history(&mut self, delta: isize) {
        let len = self.session.history().len();
        let current = self.history_list_state.selected().unwrap_or(0);
        match current.checked_add_signed(delta) {
            Some(next) if next < len => self.history_list_state.select(Some(next)),
            None => self.set_focus(Focus::Query),
            Some(_) => {}
        }
    }

    fn scroll_results(&mut self, delta: isize) {
        let rows = self.results.as_ref().map_or(0, |r| r.verses.len());
        self.results_scroll = self
            .results_scroll
            .saturating_add_signed(delta)
            .min(rows.saturating_sub(1));
    }

    fn recall_history(&mut self) {
        let Some(entry) = self
            .history_list_state
            .selected()
            .and_then(|i| self.session.history().get(i))
        else {
            return;
        };
        self.query.set(entry.query.clone());
        self.set_focus(Focus::Query);
        self.submit();
    }

    /// Start resolving the query buffer in the background.
    pub fn submit(&mut self) {
        let pending = match self.session.begin(self.query.text(), self.language) {
            Ok(pending) => pending,
            Err(ResolveError::EmptyQuery) => return,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        self.abort_task();
        tracing::debug!(id = %pending.id(), query = pending.query(), "query submitted");

        let tx = self.async_task_tx.clone();
        self.task = Some(tokio::spawn(async move {
            let done = pending.run().await;
            if tx.send(AppUpdate::Resolved(done)).await.is_err() {
                tracing::debug!("finder closed before query finished");
            }
        }));
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Drain finished background work.
    pub fn handle_updates(&mut self) {
        while let Ok(update) = self.async_task_rx.try_recv() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: AppUpdate) {
        match update {
            AppUpdate::Resolved(done) => match self.session.complete(done) {
                None => {}
                Some(Ok(resolution)) => {
                    if resolution.verses.is_empty() {
                        self.set_status("No verses in range");
                    }
                    self.results = Some(resolution);
                    self.results_scroll = 0;
                }
                Some(Err(e)) => {
                    self.results = None;
                    self.error_message = Some(e.to_string());
                }
            },
        }
    }

    /// Advance timers once per frame.
    pub fn tick(&mut self) {
        if let Some((_, ticks)) = &mut self.status_message {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.status_message = None;
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), STATUS_TICKS));
    }

    fn copy_results(&mut self) {
        let Some(text) = self.results.as_ref().map(Resolution::to_plain_text) else {
            self.set_status("Nothing to copy");
            return;
        };
        match Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => self.set_status("Copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.set_status(format!("Copy failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::bible::BookCatalog;
    use crate::services::static_provider::StaticProvider;

    fn app() -> App {
        let resolver = Resolver::new(
            BookCatalog::shared_standard(),
            Arc::new(StaticProvider::with_sample_data().unwrap()),
        );
        App::new(resolver, Language::Kor)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    async fn wait_for_update(app: &mut App) {
        let update = app.async_task_rx.recv().await.unwrap();
        app.apply_update(update);
    }

    #[tokio::test]
    async fn enter_resolves_and_records_history() {
        let mut app = app();
        type_str(&mut app, "요3:16");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_loading());

        wait_for_update(&mut app).await;
        assert!(!app.is_loading());
        let results = app.results.as_ref().unwrap();
        assert_eq!(results.verses[0].reference, "요한복음 3:16");
        assert_eq!(app.session().history().len(), 1);
    }

    #[tokio::test]
    async fn newer_query_supersedes_older() {
        let mut app = app();
        type_str(&mut app, "창1:1");
        press(&mut app, KeyCode::Enter);
        app.query.clear();
        type_str(&mut app, "롬8:28");
        press(&mut app, KeyCode::Enter);

        // the first task was aborted, so only the second reports back
        wait_for_update(&mut app).await;
        let results = app.results.as_ref().unwrap();
        assert_eq!(results.verses[0].reference, "로마서 8:28");
        assert_eq!(app.session().history().len(), 1);
    }

    #[tokio::test]
    async fn errors_show_in_overlay_and_escape_dismisses() {
        let mut app = app();
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        wait_for_update(&mut app).await;
        assert!(app.error_message.as_deref().unwrap().contains("Unrecognized"));

        press(&mut app, KeyCode::Esc);
        assert!(app.error_message.is_none());
        assert_eq!(app.query.text(), "hello");
    }

    #[tokio::test]
    async fn history_recall_reruns_query() {
        let mut app = app();
        type_str(&mut app, "시23:1");
        press(&mut app, KeyCode::Enter);
        wait_for_update(&mut app).await;

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.query.text(), "");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::History);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.query.text(), "시23:1");
        wait_for_update(&mut app).await;
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_loading());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn tab_cycles_language_and_status_expires() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.language, Language::Spa);
        assert!(app.status_message.is_some());
        for _ in 0..STATUS_TICKS {
            app.tick();
        }
        assert!(app.status_message.is_none());
    }
}
