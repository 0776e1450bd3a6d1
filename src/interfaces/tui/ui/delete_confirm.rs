use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::common::draw_popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::storage::KeyValueStore;

pub fn draw_delete_confirm_screen<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let Some(row) = app.selected_row() else {
        return;
    };

    let inner = draw_popup(frame, area, popup::DELETE_CONFIRM, "Confirm Delete", Color::Red);

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "WARNING: Are you sure you want to delete this bookmark?",
            Style::default().fg(Color::Yellow).bold(),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
            Span::styled(row.name.text(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::DarkGray)),
            Span::styled(row.target_url.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "This action cannot be undone!",
            Style::default().fg(Color::Red).bold(),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}
