//! CLI interface module
//!
//! One-shot commands that drive the same [`BookmarkView`] the TUI uses.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::BookmarkError;
use crate::storage::{KeyValueStore, StorageFactory};
use crate::view::BookmarkView;
use commands::{
    add_bookmark, config_management, export_bookmarks, import_bookmarks, list_bookmarks,
    remove_bookmark, search_bookmarks, update_bookmark,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ValidationError(msg) => format!("Invalid input: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<BookmarkError> for CliError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::Validation(msg) => CliError::ValidationError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate doesn't need storage
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force)
            }
        };
    }

    let store = StorageFactory::create(&config.storage);
    tracing::debug!(
        "Using {} storage at {} (key '{}')",
        store.backend_name(),
        store.backend().data_dir().display(),
        store.key()
    );
    let mut view = BookmarkView::new(store);
    run_with_view(&mut view, cmd)
}

/// Execute a bookmark command against an already built view.
pub fn run_with_view<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    cmd: Commands,
) -> Result<(), CliError> {
    match cmd {
        Commands::Add { name, url } => add_bookmark(view, name, url),
        Commands::Update { rank, name, url } => update_bookmark(view, rank, name, url),
        Commands::Remove { rank } => remove_bookmark(view, rank),
        Commands::List => list_bookmarks(view),
        Commands::Search { query } => search_bookmarks(view, query),
        Commands::Export { file_path } => export_bookmarks(view, file_path),
        Commands::Import { file_path } => import_bookmarks(view, file_path),
        Commands::Config { .. } => Err(CliError::CommandError(
            "config commands do not operate on bookmarks".to_string(),
        )),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "the TUI is started from the binary entry point".to_string(),
        )),
    }
}
