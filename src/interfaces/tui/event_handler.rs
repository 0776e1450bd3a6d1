//! Event handling for TUI
//!
//! Maps a key press to an [`App`] action depending on the current screen.
//! Every handler returns `true` when the application should exit.

use crossterm::event::KeyCode;

use super::app::{App, CurrentScreen};
use crate::storage::KeyValueStore;

/// Handle keyboard input based on current screen
pub fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) -> bool {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        handle_inline_search(app, key_code);
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::Form => handle_form_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => return handle_exiting_screen(app, key_code),
    }
    false
}

fn handle_main_screen<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Esc => {
            if app.is_searching() {
                app.clear_search();
            }
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.visit_selected(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.view.refresh();
            app.clamp_selection();
            app.set_status(format!("Reloaded {} bookmark(s)", app.rows().len()));
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
}

fn handle_form_screen<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Down => app.view.form_mut().toggle_field(),
        KeyCode::BackTab | KeyCode::Up => app.view.form_mut().toggle_field_back(),
        KeyCode::Backspace => {
            let form = app.view.form_mut();
            form.pop_char();
            // 实时验证
            form.validate_inputs();
        }
        KeyCode::Char(c) => {
            let form = app.view.form_mut();
            form.push_char(c);
            form.validate_inputs();
        }
        _ => {}
    }
}

fn handle_delete_confirm_screen<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
}

fn handle_help_screen<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
}

fn handle_exiting_screen<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}

fn handle_inline_search<S: KeyValueStore>(app: &mut App<S>, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            // 保留搜索结果
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.update_search();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.update_search();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Bookmark, BookmarkStore, MemoryKeyValueStore};
    use crate::view::{BookmarkView, EditCursor};

    fn app_with(list: &[Bookmark]) -> App<MemoryKeyValueStore> {
        let mut store = BookmarkStore::with_default_key(MemoryKeyValueStore::new());
        store.save_all(list).unwrap();
        App::new(BookmarkView::new(store))
    }

    fn type_str(app: &mut App<MemoryKeyValueStore>, text: &str) {
        for c in text.chars() {
            handle_key_event(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_through_form() {
        let mut app = app_with(&[]);
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen, CurrentScreen::Form);

        type_str(&mut app, "Rust");
        handle_key_event(&mut app, KeyCode::Tab);
        type_str(&mut app, "https://rust-lang.org");
        handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(
            app.view.bookmarks(),
            vec![Bookmark::new("Rust", "https://rust-lang.org")]
        );
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_back_tab_returns_to_name_field() {
        let mut app = app_with(&[]);
        handle_key_event(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Rus");
        handle_key_event(&mut app, KeyCode::Tab);
        type_str(&mut app, "https://rust-lang.org");
        handle_key_event(&mut app, KeyCode::BackTab);
        type_str(&mut app, "t");

        assert_eq!(app.view.form().site_name, "Rust");
        assert_eq!(app.view.form().site_url, "https://rust-lang.org");
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let mut app = app_with(&[]);
        handle_key_event(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Rust");
        handle_key_event(&mut app, KeyCode::Tab);
        type_str(&mut app, "rust-lang.org");
        handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Form);
        assert!(app.error_message.is_some());
        assert!(app.view.bookmarks().is_empty());
    }

    #[test]
    fn test_escape_from_edit_form_resets_cursor() {
        let mut app = app_with(&[Bookmark::new("a", "https://a.io")]);
        handle_key_event(&mut app, KeyCode::Char('e'));
        assert_eq!(app.view.cursor(), EditCursor::Editing(0));

        handle_key_event(&mut app, KeyCode::Esc);

        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(app.view.cursor(), EditCursor::Creating);
        assert!(app.view.form().site_name.is_empty());
    }

    #[test]
    fn test_inline_search_filters_rows() {
        let mut app = app_with(&[
            Bookmark::new("GitHub", "https://github.com"),
            Bookmark::new("Example", "https://example.com"),
        ]);
        handle_key_event(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "git");
        assert_eq!(app.rows().len(), 1);

        handle_key_event(&mut app, KeyCode::Enter);
        assert!(!app.inline_search_mode);
        assert_eq!(app.rows().len(), 1);

        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.rows().len(), 2);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = app_with(&[Bookmark::new("a", "https://a.io")]);
        handle_key_event(&mut app, KeyCode::Char('d'));
        handle_key_event(&mut app, KeyCode::Char('n'));
        assert_eq!(app.rows().len(), 1);

        handle_key_event(&mut app, KeyCode::Char('d'));
        handle_key_event(&mut app, KeyCode::Char('y'));
        assert!(app.rows().is_empty());
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app_with(&[]);
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
        assert!(handle_key_event(&mut app, KeyCode::Char('y')));
    }
}
