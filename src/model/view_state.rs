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

//! View state and its reducer.
//!
//! [`ViewState`] is an immutable record of everything the user controls plus
//! the authoritative episode list. The only way to change it is
//! [`ViewState::reduce`], which consumes the old state and an [`Action`] and
//! returns the new one. The views derived from it ([`TrackerView`] and
//! [`BandStats`]) are recomputed from scratch after every action.

use std::sync::Arc;

use crate::model::{
    Episode,
    dataset::sort_by_published,
    sort::{EpisodeList, SortMode, sort_episodes},
    stats::{BandStats, filter_by_band, known_percentage},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Tab {
    #[default]
    Tracker,
    Stats,
}

impl Tab {
    pub(crate) const ALL: [Tab; 2] = [Tab::Tracker, Tab::Stats];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Tracker => "Tracker",
            Tab::Stats => "Stats",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Tab::Tracker => 0,
            Tab::Stats => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    SelectTab(Tab),
    ToggleTab,
    SetSearch(String),
    ClearSearch,
    SetSort(SortMode),
    CycleSort,
    Loaded(Vec<Episode>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ViewState {
    pub(crate) tab: Tab,
    pub(crate) search: String,
    pub(crate) sort: SortMode,
    pub(crate) episodes: Arc<[Episode]>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            search: String::new(),
            sort: SortMode::default(),
            episodes: Arc::from(Vec::new()),
        }
    }
}

impl ViewState {
    pub(crate) fn new(sort: SortMode) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub(crate) fn reduce(self, action: Action) -> Self {
        match action {
            Action::SelectTab(tab) => Self { tab, ..self },
            Action::ToggleTab => {
                let tab = match self.tab {
                    Tab::Tracker => Tab::Stats,
                    Tab::Stats => Tab::Tracker,
                };
                Self { tab, ..self }
            }
            Action::SetSearch(search) => Self { search, ..self },
            Action::ClearSearch => Self {
                search: String::new(),
                ..self
            },
            Action::SetSort(sort) => Self { sort, ..self },
            Action::CycleSort => Self {
                sort: self.sort.next(),
                ..self
            },
            Action::Loaded(mut episodes) => {
                sort_by_published(&mut episodes);
                Self {
                    episodes: Arc::from(episodes),
                    ..self
                }
            }
        }
    }
}

/// Everything the tracker tab renders.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrackerView {
    pub(crate) list: EpisodeList,
    pub(crate) matching: usize,
    pub(crate) known_percentage: f64,
}

impl TrackerView {
    pub(crate) fn derive(state: &ViewState) -> Self {
        let filtered = filter_by_band(&state.episodes, &state.search);

        Self {
            matching: filtered.len(),
            known_percentage: known_percentage(&state.episodes),
            list: sort_episodes(filtered, state.sort),
        }
    }
}

/// Derived views for a state, recomputed as a unit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Derived {
    pub(crate) tracker: TrackerView,
    pub(crate) stats: BandStats,
}

impl Derived {
    pub(crate) fn from_state(state: &ViewState) -> Self {
        Self {
            tracker: TrackerView::derive(state),
            stats: BandStats::derive(&state.episodes),
        }
    }
}
