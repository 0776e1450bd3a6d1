//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for bookmarker using clap's derive macros.

use clap::{Parser, Subcommand};

/// Bookmarker - keep, search and open your bookmarks
#[derive(Parser)]
#[command(name = "bookmarker")]
#[command(version)]
#[command(about = "A small bookmark manager", long_about = None)]
pub struct Cli {
    /// Configuration file (default: bookmarker.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Add a bookmark
    Add {
        /// Site name
        name: String,

        /// Site URL (http:// or https://)
        url: String,
    },

    /// Update the bookmark shown at RANK in `list`
    Update {
        /// 1-based position as printed by `list`
        rank: usize,

        /// New site name
        name: String,

        /// New site URL
        url: String,
    },

    /// Remove the bookmark shown at RANK in `list`
    Remove {
        /// 1-based position as printed by `list`
        rank: usize,
    },

    /// List all bookmarks
    List,

    /// Show bookmarks whose name or URL contains QUERY
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Export bookmarks as a JSON array
    Export {
        /// Output file path (default: stdout)
        file_path: Option<String>,
    },

    /// Append bookmarks from a JSON array file
    Import {
        /// Input file path
        file_path: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: bookmarker.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
