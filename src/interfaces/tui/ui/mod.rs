// UI submodules
mod bookmark_form;
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod inline_search;
mod main_screen;

pub use bookmark_form::draw_bookmark_form;
pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use main_screen::draw_main_screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen};
use crate::storage::KeyValueStore;

/// Main UI rendering entry point
pub fn ui<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>) {
    let mut constraints = vec![
        Constraint::Length(3), // Title
        Constraint::Min(6),    // Bookmark table
    ];
    if app.inline_search_mode {
        constraints.push(Constraint::Length(3)); // Inline search bar
    }
    constraints.push(Constraint::Length(3)); // Status
    constraints.push(Constraint::Length(2)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);

    // 弹窗叠加在列表之上
    draw_main_screen(frame, app, chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Form => draw_bookmark_form(frame, app, chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, chunks[1]),
    }

    let mut next = 2;
    if app.inline_search_mode {
        draw_inline_search_bar(frame, app, chunks[next]);
        next += 1;
    }
    draw_status_bar(frame, app, chunks[next]);
    draw_footer(frame, app, chunks[next + 1]);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::errors::Result;
    use crate::storage::{BookmarkStore, MemoryKeyValueStore};
    use crate::view::BookmarkView;

    /// Memory backend that counts `get` calls.
    struct CountingStore {
        inner: MemoryKeyValueStore,
        reads: Rc<Cell<usize>>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }

        fn backend_name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_idle_frames_do_not_read_storage() {
        let reads = Rc::new(Cell::new(0));
        let kv = CountingStore {
            inner: MemoryKeyValueStore::new().with_entry("bookmarks", "{garbage"),
            reads: Rc::clone(&reads),
        };
        let mut app = App::new(BookmarkView::new(BookmarkStore::new(kv, "bookmarks")));
        reads.set(0);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        for _ in 0..3 {
            terminal.draw(|f| ui(f, &mut app)).unwrap();
        }

        assert_eq!(reads.get(), 0);
        assert_eq!(app.view.total(), 0);
    }
}
