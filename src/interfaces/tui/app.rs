//! TUI application state
//!
//! [`App`] wraps a [`BookmarkView`] and adds the purely visual state:
//! which screen is up, which row is selected, the status line.

use ratatui::widgets::TableState;
use tracing::{debug, error};

use crate::errors::BookmarkError;
use crate::storage::KeyValueStore;
use crate::view::{BookmarkView, FormField, RenderedRow, SubmitOutcome, ViewOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Form,
    DeleteConfirm,
    Help,
    Exiting,
}

pub struct App<S: KeyValueStore> {
    pub view: BookmarkView<S>,
    pub current_screen: CurrentScreen,
    pub inline_search_mode: bool,
    pub search_input: String,
    /// Position in `view.rows()`, not a storage index
    pub selected_index: usize,
    /// Display rank of the row being edited, for the popup title
    pub editing_rank: Option<usize>,
    pub table_state: TableState,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(view: BookmarkView<S>) -> Self {
        let mut app = Self {
            view,
            current_screen: CurrentScreen::Main,
            inline_search_mode: false,
            search_input: String::new(),
            selected_index: 0,
            editing_rank: None,
            table_state: TableState::default(),
            status_message: None,
            error_message: None,
        };
        app.clamp_selection();
        app
    }

    pub fn rows(&self) -> &[RenderedRow] {
        self.view.rows()
    }

    pub fn selected_row(&self) -> Option<&RenderedRow> {
        self.view.rows().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.sync_table_state();
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.view.rows().len() {
            self.selected_index += 1;
        }
        self.sync_table_state();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.sync_table_state();
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.view.rows().len().saturating_sub(1);
        self.sync_table_state();
    }

    /// 行数变化后保证选中项仍然有效
    pub fn clamp_selection(&mut self) {
        let len = self.view.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.sync_table_state();
    }

    fn sync_table_state(&mut self) {
        if self.view.rows().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    pub fn open_add_form(&mut self) {
        self.view.clear();
        self.editing_rank = None;
        self.view.form_mut().currently_editing = Some(FormField::SiteName);
        self.current_screen = CurrentScreen::Form;
    }

    pub fn open_edit_form(&mut self) {
        let Some((action, rank)) = self
            .selected_row()
            .map(|row| (row.edit_action(), row.rank))
        else {
            return;
        };
        match self.view.dispatch(action) {
            Ok(_) => {
                self.editing_rank = Some(rank);
                self.current_screen = CurrentScreen::Form;
            }
            Err(e) => self.set_error(e.message().to_string()),
        }
    }

    /// Leave the form without saving; the view goes back to create mode.
    pub fn cancel_form(&mut self) {
        self.view.clear();
        self.editing_rank = None;
        self.current_screen = CurrentScreen::Main;
    }

    pub fn submit_form(&mut self) {
        match self.view.submit() {
            Ok(SubmitOutcome::Added(bookmark)) => {
                self.editing_rank = None;
                self.set_status(format!("Added '{}'", bookmark.site_name));
                self.current_screen = CurrentScreen::Main;
                self.jump_to_bottom();
            }
            Ok(SubmitOutcome::Updated { bookmark, .. }) => {
                self.editing_rank = None;
                self.set_status(format!("Updated '{}'", bookmark.site_name));
                self.current_screen = CurrentScreen::Main;
                self.clamp_selection();
            }
            // 字段错误已经写进表单，留在表单页
            Err(BookmarkError::Validation(msg)) => {
                debug!("Form rejected: {}", msg);
                self.set_error(msg);
            }
            Err(e) => {
                error!("Failed to save bookmark: {}", e);
                self.set_error(format!("Failed to save bookmark: {}", e.message()));
                self.view.clear();
                self.editing_rank = None;
                self.view.refresh();
                self.current_screen = CurrentScreen::Main;
                self.clamp_selection();
            }
        }
    }

    pub fn request_delete(&mut self) {
        if self.selected_row().is_some() {
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(action) = self.selected_row().map(RenderedRow::delete_action) {
            match self.view.dispatch(action) {
                Ok(ViewOutcome::Deleted { bookmark, .. }) => {
                    self.set_status(format!("Deleted '{}'", bookmark.site_name));
                }
                Ok(_) => {}
                Err(e) => self.set_error(format!("Failed to delete bookmark: {}", e.message())),
            }
        }
        self.current_screen = CurrentScreen::Main;
        self.clamp_selection();
    }

    pub fn visit_selected(&mut self) {
        let Some(action) = self.selected_row().map(RenderedRow::visit_action) else {
            return;
        };
        match self.view.dispatch(action) {
            Ok(ViewOutcome::Opened(url)) => self.set_status(format!("Opened {}", url)),
            Ok(_) => {}
            Err(e) => {
                error!("Visit failed: {}", e);
                self.set_error(e.message().to_string());
            }
        }
    }

    /// Push the search input into the view and re-render.
    pub fn update_search(&mut self) {
        self.view.set_query(self.search_input.clone());
        self.selected_index = 0;
        self.sync_table_state();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.inline_search_mode = false;
        self.update_search();
    }

    pub fn is_searching(&self) -> bool {
        !self.view.query().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Bookmark, BookmarkStore, MemoryKeyValueStore};

    fn app_with(list: &[Bookmark]) -> App<MemoryKeyValueStore> {
        let mut store = BookmarkStore::with_default_key(MemoryKeyValueStore::new());
        store.save_all(list).unwrap();
        App::new(BookmarkView::new(store))
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with(&[
            Bookmark::new("a", "https://a.io"),
            Bookmark::new("b", "https://b.io"),
        ]);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn test_delete_last_row_clamps_selection() {
        let mut app = app_with(&[
            Bookmark::new("a", "https://a.io"),
            Bookmark::new("b", "https://b.io"),
        ]);
        app.jump_to_bottom();
        app.request_delete();
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);

        app.confirm_delete();

        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.rows().len(), 1);
    }

    #[test]
    fn test_edit_uses_storage_index_of_filtered_row() {
        let mut app = app_with(&[
            Bookmark::new("Example", "https://example.com"),
            Bookmark::new("GitHub", "https://github.com"),
        ]);
        app.search_input = "git".to_string();
        app.update_search();

        app.open_edit_form();

        assert_eq!(app.current_screen, CurrentScreen::Form);
        assert_eq!(app.view.cursor().index(), Some(1));
        assert_eq!(app.view.form().site_name, "GitHub");
        // 标题用的是显示序号，不是存储下标
        assert_eq!(app.editing_rank, Some(1));

        app.cancel_form();
        assert_eq!(app.editing_rank, None);
    }

    #[test]
    fn test_failed_visit_shows_error() {
        let mut app = app_with(&[Bookmark::new("a", "https://a.io")]);
        app.view
            .on_visit(|_| Err(BookmarkError::visit("Clipboard unavailable")));

        app.visit_selected();

        assert_eq!(app.error_message.as_deref(), Some("Clipboard unavailable"));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_successful_visit_sets_status() {
        let mut app = app_with(&[Bookmark::new("a", "https://a.io")]);
        app.view.on_visit(|_| Ok(()));

        app.visit_selected();

        assert_eq!(app.status_message.as_deref(), Some("Opened https://a.io"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut app = app_with(&[]);
        assert!(app.selected_row().is_none());
        app.request_delete();
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(app.table_state.selected(), None);
    }
}
