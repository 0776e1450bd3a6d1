//! List and search commands

use colored::Colorize;

use super::helpers::print_rows;
use crate::interfaces::cli::CliError;
use crate::storage::KeyValueStore;
use crate::view::BookmarkView;

pub fn list_bookmarks<S: KeyValueStore>(view: &mut BookmarkView<S>) -> Result<(), CliError> {
    view.set_query("");

    if view.rows().is_empty() {
        println!("{} No bookmarks found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Bookmarks:".bold().green());
    println!();
    print_rows(view.rows());
    println!();
    println!(
        "{} Total {} bookmark(s)",
        "ℹ".bold().blue(),
        view.rows().len().to_string().green()
    );
    Ok(())
}

pub fn search_bookmarks<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    query: String,
) -> Result<(), CliError> {
    let shown = view.set_query(query).len();

    if shown == 0 {
        println!(
            "{} No bookmarks match \"{}\"",
            "ℹ".bold().blue(),
            view.query().trim().yellow()
        );
        return Ok(());
    }

    println!(
        "{} \"{}\"",
        "Search results for".bold().green(),
        view.query().trim().yellow()
    );
    println!();
    print_rows(view.rows());
    println!();
    println!(
        "{} {} match(es)",
        "ℹ".bold().blue(),
        shown.to_string().green()
    );
    Ok(())
}
