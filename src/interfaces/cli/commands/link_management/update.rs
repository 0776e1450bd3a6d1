//! Update bookmark command

use colored::Colorize;

use super::helpers::index_for_rank;
use crate::interfaces::cli::CliError;
use crate::storage::KeyValueStore;
use crate::view::{BookmarkView, SubmitOutcome};

pub fn update_bookmark<S: KeyValueStore>(
    view: &mut BookmarkView<S>,
    rank: usize,
    name: String,
    url: String,
) -> Result<(), CliError> {
    let index = index_for_rank(view, rank)?;
    view.click_edit(index)?;
    view.set_name(name);
    view.set_url(url);

    if let SubmitOutcome::Updated { bookmark, .. } = view.submit()? {
        println!(
            "{} Updated bookmark {}: {} -> {}",
            "✓".bold().green(),
            rank.to_string().yellow(),
            bookmark.site_name.cyan(),
            bookmark.site_url.blue().underline()
        );
    }
    Ok(())
}
