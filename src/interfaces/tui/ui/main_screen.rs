use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;
use crate::storage::KeyValueStore;
use crate::view::{HighlightedText, Segment};

/// Turn highlight segments into styled spans.
///
/// Text past `max_chars` is cut and followed by `...`.
pub fn highlight_spans(
    text: &HighlightedText,
    base: Style,
    max_chars: Option<usize>,
) -> Vec<Span<'static>> {
    let mark = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut budget = max_chars.unwrap_or(usize::MAX);
    let mut spans = Vec::new();
    for segment in text.segments() {
        if budget == 0 {
            break;
        }
        let content: String = segment.text().chars().take(budget).collect();
        budget -= content.chars().count();
        let style = match segment {
            Segment::Highlight(_) => mark,
            Segment::Plain(_) => base,
        };
        spans.push(Span::styled(content, style));
    }
    if let Some(max) = max_chars
        && text.text().chars().count() > max
    {
        spans.push(Span::styled("...", base));
    }
    spans
}

pub fn draw_main_screen<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let query = app.view.query().trim().to_string();

    if app.rows().is_empty() {
        let empty_text = if !query.is_empty() {
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "No bookmarks match your search",
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "[Esc]",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to clear search", Style::default().fg(Color::DarkGray)),
                ]),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "No bookmarks yet",
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "[a]",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " to add your first bookmark",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ]
        };

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(table_title(&query, 0))
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Span::styled("#", header_style),
        Span::styled("Name", header_style),
        Span::styled("URL", header_style),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Line::from(Span::styled(
                    row.rank.to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(highlight_spans(
                    &row.name,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    None,
                )),
                Line::from(highlight_spans(
                    &row.url,
                    Style::default().fg(Color::Blue),
                    Some(URL_TRUNCATE_LENGTH),
                )),
            ])
        })
        .collect();

    let title = table_title(&query, rows.len());

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(30),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn table_title(query: &str, count: usize) -> String {
    if query.is_empty() {
        format!("Bookmarks ({})", count)
    } else {
        format!("Search: \"{}\" ({} found)", query, count)
    }
}
