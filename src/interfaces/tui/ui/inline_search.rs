//! Inline search bar component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::storage::KeyValueStore;

pub fn draw_inline_search_bar<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let search_text = vec![Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.search_input.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            "_",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::RAPID_BLINK),
        ),
    ])];

    let result_count = if !app.is_searching() {
        String::new()
    } else if app.rows().is_empty() {
        " (no matches)".to_string()
    } else {
        format!(" ({} matches)", app.rows().len())
    };

    let block = Block::default()
        .title(format!("Search{}", result_count))
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(search_text).block(block), area);
}
