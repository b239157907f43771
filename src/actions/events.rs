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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard) and the UI rendering
//! pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input and tick threads.
//! 2. **Process**: Key events are routed to the focused component and turned
//!    into view state [`Action`]s, which [`App::dispatch`] reduces.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{info, warn};

use crate::{
    App,
    components::{EpisodeTableAction, SearchOutcome},
    model::view_state::{Action, Tab},
    render::draw,
    share,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Resize | AppEvent::Tick => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to view state actions.
///
/// On the tracker tab the search bar sees every key first, so that typing
/// into it never triggers list navigation or global shortcuts. The episode
/// table is next, then the global keys.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    let outcome = if app.state.tab == Tab::Tracker || app.search_bar.active() {
        app.search_bar.handle_event(&event)
    } else {
        SearchOutcome::Ignored
    };

    match outcome {
        SearchOutcome::Changed(term) => {
            app.dispatch(Action::SetSearch(term));
            return Ok(());
        }
        SearchOutcome::Consumed => return Ok(()),
        SearchOutcome::Ignored => {}
    }

    if app.state.tab == Tab::Tracker {
        let len = app.derived.tracker.list.len();
        let (handled, action) = app.episode_table.process_event(&event, len);
        if let Some(EpisodeTableAction::AskForBand(row)) = action {
            ask_for_band(app, row);
        }
        if handled {
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.dispatch(Action::SelectTab(Tab::Tracker)),
        KeyCode::Char('2') => app.dispatch(Action::SelectTab(Tab::Stats)),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch(Action::ToggleTab),

        KeyCode::Char('s') => app.dispatch(Action::CycleSort),

        _ => {}
    }

    Ok(())
}

/// Builds the share intent for an unknown-band row and copies it to the
/// clipboard, reporting the outcome in the status line.
fn ask_for_band(app: &mut App, row: usize) {
    let Some(episode) = app.derived.tracker.list.unknown_episode_at(row) else {
        app.status = Some("That band is already known".to_string());
        return;
    };

    app.status = Some(match share::compose_intent(&app.config.share, episode) {
        Ok(url) => {
            info!(episode = %episode.id, "share intent created");
            if share::copy_to_clipboard(app.clipboard.as_mut(), &url) {
                format!("Copied to clipboard: {url}")
            } else {
                format!("Open to ask: {url}")
            }
        }
        Err(err) => {
            warn!(episode = %episode.id, error = %err, "unable to create share intent");
            format!("Unable to create share link: {err}")
        }
    });
}
