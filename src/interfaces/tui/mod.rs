//! Terminal User Interface (TUI) module
//!
//! Interactive front end over the same [`BookmarkView`] the CLI drives.

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, CurrentScreen};
pub use event_handler::handle_key_event;

use crate::config::StaticConfig;
use crate::errors::BookmarkError;
use crate::storage::{KeyValueStore, StorageFactory};
use crate::view::BookmarkView;
use ui::ui;

/// Run the TUI application
pub fn run_tui(config: &StaticConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = BookmarkView::new(StorageFactory::create(&config.storage));
    view.on_visit(copy_to_clipboard);
    let mut app = App::new(view);

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows 上会同时收到 Press 和 Release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key_event(app, key.code) {
                return Ok(());
            }
        }
    }
}

/// Visit handler: a terminal cannot navigate, so the URL goes to the clipboard.
fn copy_to_clipboard(url: &str) -> crate::errors::Result<()> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
        Ok(()) => {
            info!("Copied {} to clipboard", url);
            Ok(())
        }
        Err(e) => {
            warn!("Clipboard unavailable: {}", e);
            Err(BookmarkError::visit(format!("Clipboard unavailable: {}", e)))
        }
    }
}
