//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the finder's
//! terminal-based user interface using ratatui.

mod history;
mod results;

pub use history::draw_history;
pub use results::draw_results;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::constants::ui::HISTORY_PANE_PERCENT;
use crate::input::Focus;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),
            Constraint::Length(3), // Query input
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - HISTORY_PANE_PERCENT),
            Constraint::Percentage(HISTORY_PANE_PERCENT),
        ])
        .split(chunks[1]);

    draw_results(f, app, body[0]);
    draw_history(f, app, body[1]);
    draw_query(f, app, chunks[2]);
    draw_command_bar(f, app, chunks[3]);

    if app.is_loading() {
        draw_loading_indicator(f);
    }

    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    if app.show_help {
        draw_help_modal(f);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" versefinder ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("[{}] {}", app.language, app.language.version_name()),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(
            format!("  via {}", app.session().resolver().provider_name()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_query(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Query;
    let block = create_titled_block("Reference", focused);
    let inner = block.inner(area);

    let input = Paragraph::new(format!(" {}", app.query.text())).block(block);
    f.render_widget(input, area);

    if focused && !app.show_help && app.error_message.is_none() {
        let offset = app.query.before_cursor().width() as u16 + 1;
        f.set_cursor((inner.left() + offset).min(inner.right().saturating_sub(1)), inner.top());
    }
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled("Commands/Status", Style::default().fg(Color::Yellow)));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let line = if let Some((status, _)) = &app.status_message {
        Line::from(Span::styled(format!(" {status}"), Style::default().fg(Color::Green)))
    } else {
        let hints: &[(&str, &str)] = match app.focus {
            Focus::Query => &[
                ("Enter", "Find"),
                ("Tab", "Language"),
                ("↓", "History"),
                ("^Y", "Copy"),
                ("F1", "Help"),
                ("^C", "Quit"),
            ],
            Focus::History => &[
                ("Enter", "Run again"),
                ("↑/↓", "Select"),
                ("Esc", "Back"),
                ("^C", "Quit"),
            ],
        };
        Line::from(create_help_text(hints))
    };

    f.render_widget(Paragraph::new(line).style(Style::default().fg(Color::Gray)), inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")];

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// A rectangle of at most `width` x `height` centered in `outer`.
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

// Draw a loading indicator overlay
fn draw_loading_indicator(f: &mut Frame) {
    let area = centered(f.size(), 22, 3);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new("Looking up...")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(text, area);
}

// Draw an error message overlay
#[allow(clippy::cast_possible_truncation)]
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();
    let width = 60.min(size.width.saturating_sub(4));
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let lines = message.width().div_ceil(inner_width).max(1) as u16;
    let area = centered(size, width, lines + 4);

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1)
        .split(area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[1]);
}

fn draw_help_modal(f: &mut Frame) {
    let rows: &[(&str, &str)] = &[
        ("Enter", "Look up the reference"),
        ("Tab", "Switch language (KOR / SPA / ENG)"),
        ("↓ / ↑", "Move into and through history"),
        ("Enter (history)", "Run a past query again"),
        ("PgUp / PgDn", "Scroll results"),
        ("Ctrl+Y", "Copy results to clipboard"),
        ("Ctrl+U", "Clear the query"),
        ("Esc", "Dismiss / cancel / clear"),
        ("Ctrl+C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Formats: 창1:1  창1:1-3  창1:1-2:3  창1:1,3  창1:1-3,5-7  창1",
            Style::default().fg(Color::LightBlue),
        )),
        Line::raw(""),
    ];
    lines.extend(rows.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("{key:>16}"), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {description}")),
        ])
    }));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered(f.size(), 64, height);
    let help = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled("Help", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
