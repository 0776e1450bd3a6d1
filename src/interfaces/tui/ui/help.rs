use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::common::draw_popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / Down", "Move down"),
            ("k / Up", "Move up"),
            ("g / Home", "First bookmark"),
            ("G / End", "Last bookmark"),
        ],
    ),
    (
        "Bookmarks",
        &[
            ("o / Enter", "Visit (copies the URL to the clipboard)"),
            ("a", "Add a bookmark"),
            ("e", "Edit the selected bookmark"),
            ("d", "Delete the selected bookmark"),
            ("r", "Reload from storage"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Search names and URLs"),
            ("Enter", "Keep results and leave the search bar"),
            ("Esc", "Clear the search"),
        ],
    ),
    ("General", &[("?", "Toggle help"), ("q", "Quit")]),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner = draw_popup(frame, area, popup::HELP, "Help", Color::Blue);

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(Color::Cyan).bold().underlined(),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
