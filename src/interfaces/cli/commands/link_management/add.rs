//! Add bookmark command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::KeyValueStore;
use crate::view::{BookmarkView, SubmitOutcome};

pub fn add_bookmark<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    name: String,
    url: String,
) -> Result<(), CliError> {
    view.clear();
    view.set_name(name);
    view.set_url(url);

    if let SubmitOutcome::Added(bookmark) = view.submit()? {
        println!(
            "{} Added bookmark: {} -> {}",
            "✓".bold().green(),
            bookmark.site_name.cyan(),
            bookmark.site_url.blue().underline()
        );
    }
    Ok(())
}
