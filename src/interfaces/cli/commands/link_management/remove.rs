//! Remove bookmark command

use colored::Colorize;

use super::helpers::index_for_rank;
use crate::interfaces::cli::CliError;
use crate::storage::KeyValueStore;
use crate::view::{BookmarkView, RowAction, ViewOutcome};

pub fn remove_bookmark<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    rank: usize,
) -> Result<(), CliError> {
    let index = index_for_rank(view, rank)?;

    if let ViewOutcome::Deleted { bookmark, .. } = view.dispatch(RowAction::Delete(index))? {
        println!(
            "{} Removed bookmark: {} -> {}",
            "✓".bold().green(),
            bookmark.site_name.cyan(),
            bookmark.site_url.blue()
        );
    }
    Ok(())
}
