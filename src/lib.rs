//! Bookmarker - a small bookmark manager
//!
//! Keeps a list of named URLs in a key-value store, renders it with
//! case-insensitive search highlighting and drives add/edit/delete through a
//! single view controller shared by the CLI and the TUI.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface
//! - **full**: All features enabled
//!
//! # Architecture
//! - `storage`: Bookmark model, key-value backends and the bookmark store
//! - `view`: Form state, validation, row rendering and the view controller
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `system`: Logging setup

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod system;
pub mod utils;
pub mod view;
