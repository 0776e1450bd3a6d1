use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::common::draw_popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::storage::KeyValueStore;
use crate::view::FormField;

/// 编辑时显示列表里看到的序号，而不是存储下标
fn form_title<S: KeyValueStore>(app: &App<S>) -> (String, Color) {
    if !app.view.is_editing() {
        return (" Add Bookmark ".to_string(), Color::Green);
    }
    match app.editing_rank {
        Some(rank) => (format!(" Edit Bookmark #{} ", rank), Color::Yellow),
        None => (" Edit Bookmark ".to_string(), Color::Yellow),
    }
}

/// Add and edit share one popup; the title follows the edit cursor.
pub fn draw_bookmark_form<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let form = app.view.form();
    let (title, color) = form_title(app);

    let inner = draw_popup(frame, area, popup::BOOKMARK_FORM, &title, color);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, input_area, error_area) in [
        (FormField::SiteName, chunks[0], chunks[1]),
        (FormField::SiteUrl, chunks[2], chunks[3]),
    ] {
        let focused = form.currently_editing == Some(field);
        let error = form.get_error(field);

        let border_color = match (focused, error.is_some()) {
            (_, true) => Color::Red,
            (true, false) => Color::Yellow,
            (false, false) => Color::DarkGray,
        };

        let mut value = vec![Span::styled(
            form.input(field).to_string(),
            Style::default().fg(Color::White),
        )];
        if focused {
            value.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }

        let input = Paragraph::new(Line::from(value)).block(
            Block::default()
                .title(field.display_title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, input_area);

        if let Some(message) = error {
            let line = Paragraph::new(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(line, error_area);
        }
    }

    let hint = if form.is_editing() {
        "Enter saves over this bookmark, Esc cancels the edit"
    } else {
        "Enter adds the bookmark, Esc cancels"
    };
    let hint = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray).italic()));
    frame.render_widget(hint, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Bookmark, BookmarkStore, MemoryKeyValueStore};
    use crate::view::BookmarkView;

    #[test]
    fn test_edit_title_uses_filtered_rank() {
        let mut store = BookmarkStore::with_default_key(MemoryKeyValueStore::new());
        store
            .save_all(&[
                Bookmark::new("Example", "https://example.com"),
                Bookmark::new("GitHub", "https://github.com"),
            ])
            .unwrap();
        let mut app = App::new(BookmarkView::new(store));
        app.search_input = "git".to_string();
        app.update_search();

        app.open_edit_form();
        assert_eq!(form_title(&app).0, " Edit Bookmark #1 ");

        app.cancel_form();
        app.open_add_form();
        assert_eq!(form_title(&app).0, " Add Bookmark ");
    }
}
