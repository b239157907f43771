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

//! Interactive episode table widget and state management.
//!
//! The table renders whatever [`EpisodeList`](crate::model::sort::EpisodeList)
//! the current sort mode produces and keeps track of the highlighted row. The
//! row count changes every time the search term or sort mode does, so every
//! navigation method takes the current length.

mod event;
mod render;

use ratatui::widgets::TableState;

/// Rows moved by a full page jump.
const PAGE_SIZE: usize = 20;

#[derive(Debug, PartialEq)]
pub(crate) enum EpisodeTableAction {
    /// The user asked to share a "which band?" intent for a row.
    AskForBand(usize),
}

pub(crate) struct EpisodeTable {
    pub(crate) table_state: TableState,
}

impl EpisodeTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Keeps the highlighted row inside a list of `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn goto_page_forward(&mut self, len: usize) {
        if len == 0 { return; }
        let i = self.table_state.selected().map_or(0, |i| (i + PAGE_SIZE).min(len - 1));
        self.table_state.select(Some(i));
    }

    fn goto_page_back(&mut self, len: usize) {
        if len == 0 { return; }
        let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(PAGE_SIZE));
        self.table_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_around() {
        let mut table = EpisodeTable::new();

        table.goto_previous(3);
        assert_eq!(table.selected(), Some(0));
        table.goto_previous(3);
        assert_eq!(table.selected(), Some(2));
        table.goto_next(3);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_selects_nothing() {
        let mut table = EpisodeTable::new();

        table.goto_next(0);
        table.goto_last(0);
        table.goto_page_forward(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut table = EpisodeTable::new();
        table.clamp(30);

        table.goto_page_forward(30);
        assert_eq!(table.selected(), Some(20));
        table.goto_page_forward(30);
        assert_eq!(table.selected(), Some(29));
        table.goto_page_back(30);
        table.goto_page_back(30);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn clamp_follows_shrinking_lists() {
        let mut table = EpisodeTable::new();
        table.clamp(10);
        table.goto_last(10);

        table.clamp(4);
        assert_eq!(table.selected(), Some(3));
        table.clamp(0);
        assert_eq!(table.selected(), None);
        table.clamp(2);
        assert_eq!(table.selected(), Some(0));
    }
}
