//! Bookmark view controller
//!
//! [`BookmarkView`] owns the store, the form and the current search query.
//! Every user action goes validate → store mutation → re-render, and the
//! rendered rows are always rebuilt from a fresh read of the store.

mod form;
pub mod render;
mod validation;

pub use form::{EditCursor, FormField, FormState};
pub use render::{
    HighlightedText, RenderedRow, RowAction, Segment, find_matches, highlight, matches_query,
    render_rows,
};
pub use validation::{FieldError, validate_bookmark};

use tracing::{debug, error, info, warn};

use crate::errors::{BookmarkError, Result};
use crate::storage::{Bookmark, BookmarkList, BookmarkStore, KeyValueStore};

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Bookmark),
    Updated { index: usize, bookmark: Bookmark },
}

/// Result of dispatching a [`RowAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Opened(String),
    Editing(usize),
    Deleted { index: usize, bookmark: Bookmark },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

type VisitHandler = Box<dyn FnMut(&str) -> Result<()>>;

pub struct BookmarkView<S: KeyValueStore> {
    store: BookmarkStore<S>,
    form: FormState,
    query: String,
    rows: Vec<RenderedRow>,
    /// List length seen by the last render
    total: usize,
    visit_handler: Option<VisitHandler>,
}

impl<S: KeyValueStore> BookmarkView<S> {
    pub fn new(store: BookmarkStore<S>) -> Self {
        let mut view = Self {
            store,
            form: FormState::new(),
            query: String::new(),
            rows: Vec::new(),
            total: 0,
            visit_handler: None,
        };
        view.refresh();
        view
    }

    pub fn store(&self) -> &BookmarkStore<S> {
        &self.store
    }

    pub fn bookmarks(&self) -> BookmarkList {
        self.store.load_all()
    }

    /// Rows from the last render.
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Size of the full list as of the last render. Unlike
    /// [`BookmarkStore::len`] this does not read storage.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn cursor(&self) -> EditCursor {
        self.form.cursor
    }

    /// True while the update/cancel control should be shown.
    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_name(&mut self, site_name: impl Into<String>) {
        self.form.site_name = site_name.into();
    }

    pub fn set_url(&mut self, site_url: impl Into<String>) {
        self.form.site_url = site_url.into();
    }

    /// Register the handler run with the literal URL when a row is visited.
    /// An error from the handler is returned by [`BookmarkView::dispatch`].
    pub fn on_visit(&mut self, handler: impl FnMut(&str) -> Result<()> + 'static) {
        self.visit_handler = Some(Box::new(handler));
    }

    /// Change the search query and re-render.
    pub fn set_query(&mut self, query: impl Into<String>) -> &[RenderedRow] {
        self.query = query.into();
        self.refresh();
        &self.rows
    }

    /// Re-read the store and rebuild the rows for the current query.
    pub fn refresh(&mut self) {
        let bookmarks = self.store.load_all();
        self.rows = render_rows(&bookmarks, &self.query);
        self.total = bookmarks.len();
        debug!(
            "Rendered {} of {} bookmark(s) for query {:?}",
            self.rows.len(),
            bookmarks.len(),
            self.query.trim()
        );
    }

    /// Validate the form and either append or overwrite, depending on the
    /// edit cursor. On success the form is cleared back to create mode.
    ///
    /// A validation failure returns [`BookmarkError::Validation`] before any
    /// store call and leaves the cursor and inputs as they were.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let bookmark = match validate_bookmark(&self.form.site_name, &self.form.site_url) {
            Ok(bookmark) => bookmark,
            Err(e) => {
                self.form.clear_errors();
                self.form.set_error(e.field, e.message.clone());
                return Err(BookmarkError::validation(e.to_string()));
            }
        };

        let outcome = match self.form.cursor {
            EditCursor::Creating => {
                self.store.append(bookmark.clone())?;
                SubmitOutcome::Added(bookmark)
            }
            EditCursor::Editing(index) => {
                self.store.replace_at(index, bookmark.clone())?;
                SubmitOutcome::Updated { index, bookmark }
            }
        };

        self.form.clear();
        self.refresh();
        Ok(outcome)
    }

    /// Load the bookmark at `index` into the form and switch to edit mode.
    pub fn click_edit(&mut self, index: usize) -> Result<()> {
        let bookmarks = self.store.load_all();
        let Some(bookmark) = bookmarks.get(index) else {
            error!(
                "Edit requested for index {} but only {} bookmark(s) exist",
                index,
                bookmarks.len()
            );
            return Err(BookmarkError::index_out_of_range(index, bookmarks.len()));
        };
        self.form.begin_edit(index, bookmark);
        debug!("Editing bookmark #{}", index);
        Ok(())
    }

    /// Delete the bookmark at `index`. The edit cursor is always reset so it
    /// cannot point at a shifted entry afterwards.
    pub fn click_delete(&mut self, index: usize) -> Result<Bookmark> {
        self.form.reset_cursor();
        let removed = self.store.remove_at(index);
        self.refresh();
        removed
    }

    /// Explicit form reset.
    pub fn clear(&mut self) {
        self.form.clear();
    }

    pub fn dispatch(&mut self, action: RowAction) -> Result<ViewOutcome> {
        match action {
            RowAction::Visit(url) => {
                info!("Visiting {}", url);
                if let Some(handler) = self.visit_handler.as_mut() {
                    handler(&url)?;
                }
                Ok(ViewOutcome::Opened(url))
            }
            RowAction::Edit(index) => {
                self.click_edit(index)?;
                Ok(ViewOutcome::Editing(index))
            }
            RowAction::Delete(index) => {
                let bookmark = self.click_delete(index)?;
                Ok(ViewOutcome::Deleted { index, bookmark })
            }
        }
    }

    /// Validate and append a batch, skipping entries that fail validation.
    pub fn import(&mut self, batch: Vec<Bookmark>) -> Result<ImportSummary> {
        let mut valid = Vec::with_capacity(batch.len());
        let mut skipped = 0;
        for candidate in batch {
            match validate_bookmark(&candidate.site_name, &candidate.site_url) {
                Ok(bookmark) => valid.push(bookmark),
                Err(e) => {
                    warn!("Skipping '{}': {}", candidate.site_name, e);
                    skipped += 1;
                }
            }
        }

        let added = self.store.extend(valid)?;
        self.refresh();
        Ok(ImportSummary { added, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;

    fn view_with(list: &[Bookmark]) -> BookmarkView<MemoryKeyValueStore> {
        let mut store = BookmarkStore::with_default_key(MemoryKeyValueStore::new());
        store.save_all(list).unwrap();
        BookmarkView::new(store)
    }

    #[test]
    fn test_invalid_submit_touches_nothing() {
        let mut view = view_with(&[Bookmark::new("a", "https://a.io")]);
        view.click_edit(0).unwrap();
        view.set_url("not a url");
        let writes = view.store().backend().writes();

        let err = view.submit().unwrap_err();

        assert!(matches!(err, BookmarkError::Validation(_)));
        assert_eq!(view.cursor(), EditCursor::Editing(0));
        assert_eq!(view.form().site_url, "not a url");
        assert!(view.form().get_error(FormField::SiteUrl).is_some());
        assert_eq!(view.store().backend().writes(), writes);
    }

    #[test]
    fn test_visit_runs_handler_with_literal_url() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut view = view_with(&[Bookmark::new("GitHub", "https://github.com")]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        view.on_visit(move |url| {
            sink.borrow_mut().push(url.to_string());
            Ok(())
        });

        view.set_query("git");
        let action = view.rows()[0].visit_action();
        let outcome = view.dispatch(action).unwrap();

        assert_eq!(outcome, ViewOutcome::Opened("https://github.com".to_string()));
        assert_eq!(seen.borrow().as_slice(), ["https://github.com".to_string()]);
    }

    #[test]
    fn test_visit_handler_error_is_returned() {
        let mut view = view_with(&[Bookmark::new("GitHub", "https://github.com")]);
        view.on_visit(|_| Err(BookmarkError::visit("clipboard unavailable")));

        let action = view.rows()[0].visit_action();
        let err = view.dispatch(action).unwrap_err();

        assert!(matches!(err, BookmarkError::Visit(_)));
        assert_eq!(err.code(), "E007");
    }

    #[test]
    fn test_total_counts_full_list_under_query() {
        let mut view = view_with(&[
            Bookmark::new("GitHub", "https://github.com"),
            Bookmark::new("Example", "https://example.com"),
        ]);
        view.set_query("git");
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.total(), 2);

        view.click_delete(0).unwrap();
        assert_eq!(view.total(), 1);
    }

    #[test]
    fn test_delete_keeps_query_applied() {
        let mut view = view_with(&[
            Bookmark::new("GitHub", "https://github.com"),
            Bookmark::new("GitLab", "https://gitlab.com"),
            Bookmark::new("Example", "https://example.com"),
        ]);
        view.set_query("git");
        assert_eq!(view.rows().len(), 2);

        view.click_delete(0).unwrap();

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].name.text(), "GitLab");
        assert_eq!(view.rows()[0].index, 0);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut view = view_with(&[]);
        assert!(matches!(
            view.click_edit(0),
            Err(BookmarkError::IndexOutOfRange(_))
        ));
        assert_eq!(view.cursor(), EditCursor::Creating);
    }
}
