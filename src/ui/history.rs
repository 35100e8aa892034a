use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use crate::app::App;
use crate::input::Focus;
use crate::ui::create_titled_block;

/// Past queries, newest first, with the local time they resolved.
pub fn draw_history(f: &mut Frame, app: &mut App, area: Rect) {
    let selected = app.history_list_state.selected();
    let items: Vec<ListItem> = app
        .session()
        .history()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (prefix, text_style) = if Some(i) == selected {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            let time = entry.timestamp.with_timezone(&Local).format("%H:%M");

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(entry.query.clone(), text_style),
                Span::styled(format!("  {time}"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let focused = app.focus == Focus::History;
    let list = List::new(items)
        .block(create_titled_block("History", focused))
        .highlight_style(Style::default().bg(Color::Rgb(80, 80, 120)).add_modifier(Modifier::BOLD))
        .highlight_symbol("");

    f.render_stateful_widget(list, area, &mut app.history_list_state);
}
