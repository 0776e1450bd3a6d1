//! Bookmark management commands

mod add;
pub mod helpers;
mod import_export;
mod list;
mod remove;
mod update;

pub use add::add_bookmark;
pub use import_export::{export_bookmarks, import_bookmarks};
pub use list::{list_bookmarks, search_bookmarks};
pub use remove::remove_bookmark;
pub use update::update_bookmark;
