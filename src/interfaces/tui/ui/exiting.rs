use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::common::draw_popup;
use crate::interfaces::tui::constants::popup;

pub fn draw_exiting_screen(frame: &mut Frame, area: Rect) {
    let inner = draw_popup(frame, area, popup::EXITING, "Exit", Color::Magenta);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Bookmarker?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green).bold()),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().fg(Color::Red).bold()),
            Span::raw(" No"),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
