//! Import and export bookmark commands

use std::fs;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::{BookmarkList, KeyValueStore};
use crate::view::BookmarkView;

pub fn export_bookmarks<S: KeyValueStore>(
    view: &BookmarkView<S>,
    file_path: Option<String>,
) -> Result<(), CliError> {
    let bookmarks = view.bookmarks();
    let json = serde_json::to_string_pretty(&bookmarks)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize bookmarks: {}", e)))?;

    match file_path {
        Some(path) => {
            fs::write(&path, json).map_err(|e| {
                CliError::CommandError(format!("Failed to write export file '{}': {}", path, e))
            })?;
            println!(
                "{} Exported {} bookmark(s) to {}",
                "✓".bold().green(),
                bookmarks.len().to_string().green(),
                path.blue()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn import_bookmarks<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    file_path: String,
) -> Result<(), CliError> {
    let content = fs::read_to_string(&file_path).map_err(|e| {
        CliError::CommandError(format!("Failed to read import file '{}': {}", file_path, e))
    })?;
    let batch: BookmarkList = serde_json::from_str(&content).map_err(|e| {
        CliError::ParseError(format!("'{}' is not a JSON bookmark array: {}", file_path, e))
    })?;

    let summary = view.import(batch)?;

    println!(
        "{} Imported {} bookmark(s) from {}",
        "✓".bold().green(),
        summary.added.to_string().green(),
        file_path.blue()
    );
    if summary.skipped > 0 {
        println!(
            "{} Skipped {} invalid entr{}",
            "⚠".bold().yellow(),
            summary.skipped.to_string().yellow(),
            if summary.skipped == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}
