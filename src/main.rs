// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Band Tracker TUI.
//!
//! A terminal viewer for a podcast's episode list that tracks which band was
//! featured in each episode.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the terminal, the view state and rendering.
//! * An **Input Thread** forwards keyboard events.
//! * A **Tick Thread** triggers periodic redraws.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. The threads talk
//! to the main thread through `std::sync::mpsc` channels, and all view state
//! changes go through [`ViewState::reduce`](model::view_state::ViewState::reduce).

mod actions;
mod components;
mod config;
mod model;
mod render;
mod share;
mod theme;
mod util;

use anyhow::{Context, Result};
use arboard::Clipboard;
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    mem,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{debug, error, info};

use crate::{
    actions::events::{AppEvent, process_events},
    components::{EpisodeTable, SearchBar},
    config::AppConfig,
    model::{
        dataset::load_episodes,
        view_state::{Action, Derived, ViewState},
    },
    theme::Theme,
};

/// Browse a podcast's episodes by featured band.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Episode dataset (JSON array) to load instead of the configured one.
    dataset: Option<String>,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub state: ViewState,
    pub derived: Derived,

    pub search_bar: SearchBar,
    pub episode_table: EpisodeTable,

    pub clipboard: Option<Clipboard>,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let state = ViewState::new(config.default_sort);
        let derived = Derived::from_state(&state);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            state,
            derived,
            search_bar: SearchBar::new(),
            episode_table: EpisodeTable::new(),
            clipboard: share::open_clipboard(),
            status: None,
        }
    }

    /// Reduces an action into the view state and recomputes every derived
    /// view from it.
    pub fn dispatch(&mut self, action: Action) {
        match &action {
            Action::Loaded(episodes) => debug!(count = episodes.len(), "dispatch loaded episodes"),
            other => debug!(action = ?other, "dispatch"),
        }

        let state = mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.derived = Derived::from_state(&self.state);
        self.episode_table.clamp(self.derived.tracker.list.len());
        self.status = None;
    }
}

/// The entry point of the application.
///
/// Sets up logging (best effort), loads the dataset, manages the terminal
/// lifecycle, and returns an error if the terminal cannot be driven.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config();

    let _log_guard = util::log::start_logging(config::config_dir().as_deref());

    let source = config.dataset_source(cli.dataset);
    let episodes = load_episodes(&source);

    let mut app = App::new(config);
    app.dispatch(Action::Loaded(episodes));

    let mut terminal = setup_terminal().context("Failed to initalise terminal")?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "application error");
    }
    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => tx_keys.send(AppEvent::Key(key)),
                Ok(event::Event::Resize(_, _)) => tx_keys.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    error!(error = %err, "failed to read terminal event");
                    tx_keys.send(AppEvent::ExitApplication).ok();
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{fixtures, sort::SortMode};

    #[test]
    fn new_app_uses_configured_sort() {
        let config = AppConfig {
            default_sort: SortMode::Count,
            ..AppConfig::default()
        };

        let app = App::new(config);

        assert_eq!(app.state.sort, SortMode::Count);
        assert!(app.derived.tracker.list.is_empty());
    }

    #[test]
    fn dispatch_recomputes_and_keeps_selection_in_range() {
        let mut app = App::new(AppConfig::default());
        app.dispatch(Action::Loaded(fixtures::mixed()));
        assert_eq!(app.episode_table.selected(), Some(0));

        app.dispatch(Action::SetSearch("yo la".into()));

        assert_eq!(app.derived.tracker.matching, 1);
        assert_eq!(app.episode_table.selected(), Some(0));

        app.dispatch(Action::SetSearch("nothing matches".into()));
        assert_eq!(app.episode_table.selected(), None);
    }

    #[test]
    fn dispatch_clears_the_status_line() {
        let mut app = App::new(AppConfig::default());
        app.status = Some("Copied".into());

        app.dispatch(Action::CycleSort);

        assert_eq!(app.status, None);
    }

    #[test]
    fn cli_takes_an_optional_dataset() {
        let cli = Cli::try_parse_from(["bandtracker", "episodes.json"]).unwrap();
        assert_eq!(cli.dataset.as_deref(), Some("episodes.json"));

        let cli = Cli::try_parse_from(["bandtracker"]).unwrap();
        assert_eq!(cli.dataset, None);
    }
}
