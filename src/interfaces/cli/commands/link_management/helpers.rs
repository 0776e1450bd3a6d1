//! Helper functions for bookmark CLI commands

use colored::{ColoredString, Colorize};

use crate::interfaces::cli::CliError;
use crate::storage::KeyValueStore;
use crate::view::{BookmarkView, HighlightedText, RenderedRow, Segment};

/// Colour `text`, painting search hits black on yellow.
pub fn format_highlighted(text: &HighlightedText, base: impl Fn(&str) -> ColoredString) -> String {
    text.segments()
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => base(s).to_string(),
            Segment::Highlight(s) => s.black().on_yellow().bold().to_string(),
        })
        .collect()
}

pub fn print_rows(rows: &[RenderedRow]) {
    let width = rows.last().map_or(1, |row| row.rank.to_string().len());
    for row in rows {
        println!(
            "  {}. {} -> {}",
            format!("{:>width$}", row.rank, width = width).yellow(),
            format_highlighted(&row.name, |s| s.cyan().bold()),
            format_highlighted(&row.url, |s| s.blue().underline()),
        );
    }
}

/// Translate a 1-based rank from `list` into a list index.
pub fn index_for_rank<S: KeyValueStore>(
    view: &BookmarkView<S>,
    rank: usize,
) -> Result<usize, CliError> {
    view.rows()
        .iter()
        .find(|row| row.rank == rank)
        .map(|row| row.index)
        .ok_or_else(|| {
            CliError::CommandError(format!(
                "No bookmark at rank {} ({} bookmark(s) listed)",
                rank,
                view.rows().len()
            ))
        })
}
