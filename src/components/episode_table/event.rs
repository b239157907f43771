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

//! Input handling and event processing for the episode table.
//!
//! This module maps raw terminal keyboard events to table navigation and the
//! share call-to-action.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{EpisodeTable, EpisodeTableAction};

impl EpisodeTable {
    /// Handles a key for a table currently showing `len` rows.
    ///
    /// Returns `(handled, action)`.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> (bool, Option<EpisodeTableAction>) {
        let Event::Key(key_event) = event else {
            return (false, None);
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(len),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(len),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(len),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(len),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => self.goto_page_forward(len),
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => self.goto_page_back(len),

            (KeyCode::Char('o'), _) | (KeyCode::Enter, _) => {
                let action = self.selected().map(EpisodeTableAction::AskForBand);
                return (true, action);
            }

            _ => return (false, None),
        }

        (true, None)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_keys_are_handled() {
        let mut table = EpisodeTable::new();

        assert_eq!(table.process_event(&key(KeyCode::Char('j')), 5), (true, None));
        assert_eq!(table.process_event(&key(KeyCode::Char('j')), 5), (true, None));
        assert_eq!(table.selected(), Some(1));

        assert_eq!(table.process_event(&key(KeyCode::Char('G')), 5), (true, None));
        assert_eq!(table.selected(), Some(4));
    }

    #[test]
    fn ask_key_reports_selected_row() {
        let mut table = EpisodeTable::new();
        table.clamp(3);
        table.process_event(&key(KeyCode::Down), 3);

        assert_eq!(
            table.process_event(&key(KeyCode::Char('o')), 3),
            (true, Some(EpisodeTableAction::AskForBand(1)))
        );
    }

    #[test]
    fn other_keys_pass_through() {
        let mut table = EpisodeTable::new();

        assert_eq!(table.process_event(&key(KeyCode::Char('s')), 3), (false, None));
    }
}
