//! User-facing interfaces built on top of [`crate::view::BookmarkView`]

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
