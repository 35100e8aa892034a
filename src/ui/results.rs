use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::create_titled_block;

/// Resolved verses, one paragraph line per verse.
pub fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(resolution) = &app.results else {
        let hint = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  Type a reference, e.g. {}", app.language.examples()),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(create_titled_block("Verses", false));
        f.render_widget(hint, area);
        return;
    };

    let title = format!(
        "{} ({} verse{}, {})",
        resolution.book_name,
        resolution.verses.len(),
        if resolution.verses.len() == 1 { "" } else { "s" },
        resolution.language.version_name(),
    );

    let lines: Vec<Line> = resolution
        .verses
        .iter()
        .skip(app.results_scroll)
        .map(|verse| {
            Line::from(vec![
                Span::styled(
                    format!("{}:{} ", verse.chapter, verse.verse),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(verse.text.clone()),
            ])
        })
        .collect();

    let body = Paragraph::new(lines)
        .block(create_titled_block(&title, false))
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}
