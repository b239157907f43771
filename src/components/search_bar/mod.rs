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

//! Band search input.
//!
//! `/` focuses the input; while focused every key edits the search term and
//! each edit is reported so the tracker list can be recomputed. `Enter` or
//! `Esc` hands focus back to the list, and `Esc` on an unfocused bar clears
//! the term.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, PartialEq)]
pub(crate) enum SearchOutcome {
    /// The key was not for the search bar.
    Ignored,
    /// The key was consumed without changing the term.
    Consumed,
    /// The term changed to the contained value.
    Changed(String),
}

pub(crate) struct SearchBar {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> SearchOutcome {
        let Event::Key(key_event) = event else {
            return SearchOutcome::Ignored;
        };

        if self.active {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.active = false;
                    SearchOutcome::Consumed
                }

                _ => {
                    // Delegate all other key events to the managed input component.
                    let before = self.input.value().to_string();
                    self.input.handle_event(event);
                    if self.input.value() != before {
                        SearchOutcome::Changed(self.input.value().to_string())
                    } else {
                        SearchOutcome::Consumed
                    }
                }
            }
        } else {
            match key_event.code {
                KeyCode::Char('/') => {
                    self.active = true;
                    SearchOutcome::Consumed
                }

                KeyCode::Esc if !self.input.value().is_empty() => {
                    self.input.reset();
                    SearchOutcome::Changed(String::new())
                }

                _ => SearchOutcome::Ignored,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(bar: &mut SearchBar, text: &str) -> Vec<SearchOutcome> {
        text.chars().map(|c| bar.handle_event(&key(KeyCode::Char(c)))).collect()
    }

    #[test]
    fn inactive_bar_ignores_typing() {
        let mut bar = SearchBar::new();

        assert_eq!(bar.handle_event(&key(KeyCode::Char('w'))), SearchOutcome::Ignored);
        assert_eq!(bar.value(), "");
    }

    #[test]
    fn typing_reports_each_change() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&key(KeyCode::Char('/'))), SearchOutcome::Consumed);
        assert!(bar.active());

        let outcomes = type_text(&mut bar, "wil");

        assert_eq!(
            outcomes,
            vec![
                SearchOutcome::Changed("w".into()),
                SearchOutcome::Changed("wi".into()),
                SearchOutcome::Changed("wil".into()),
            ]
        );
        assert_eq!(
            bar.handle_event(&key(KeyCode::Backspace)),
            SearchOutcome::Changed("wi".into())
        );
    }

    #[test]
    fn enter_leaves_the_term_and_esc_clears_it() {
        let mut bar = SearchBar::new();
        bar.handle_event(&key(KeyCode::Char('/')));
        type_text(&mut bar, "low");

        assert_eq!(bar.handle_event(&key(KeyCode::Enter)), SearchOutcome::Consumed);
        assert!(!bar.active());
        assert_eq!(bar.value(), "low");

        assert_eq!(bar.handle_event(&key(KeyCode::Esc)), SearchOutcome::Changed(String::new()));
        assert_eq!(bar.value(), "");
        assert_eq!(bar.handle_event(&key(KeyCode::Esc)), SearchOutcome::Ignored);
    }
}
