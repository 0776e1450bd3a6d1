use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::PopupSize;
use crate::storage::KeyValueStore;

/// Draw title bar with version and statistics
pub fn draw_title_bar<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("Bookmarker", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Total: {} ", app.view.total()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view.store().backend_name(),
            Style::default().fg(Color::Green),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let (status_text, status_style) = if let Some(error) = &app.error_message {
        (
            format!("[ERROR] {}", error),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if let Some(status) = &app.status_message {
        (
            format!("[SUCCESS] {}", status),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main if app.inline_search_mode => vec![
            ("Enter", "Keep Results", Color::Green),
            ("Esc", "Clear", Color::Red),
        ],
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("/", "Search", Color::Cyan),
            ("o", "Visit", Color::Cyan),
            ("a", "Add", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Form => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// 渲染居中弹窗并返回内部区域
pub fn draw_popup(
    frame: &mut Frame,
    area: Rect,
    size: PopupSize,
    title: &str,
    color: Color,
) -> Rect {
    let popup_area = centered_rect(size.width, size.height, area);

    // 阴影效果
    let shadow = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(shadow, popup_area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(color).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color));
    frame.render_widget(block, popup_area);

    popup_area.inner(Margin::new(2, 1))
}

/// 创建居中矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
        assert!(inner.y >= 12 && inner.y <= 13);
    }
}
