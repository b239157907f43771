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

//! Sort modes for the tracker list.

use serde::{Deserialize, Serialize};

use crate::model::{BandKey, Episode, stats::group_by_band};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortMode {
    /// Newest first, as the dataset is stored.
    #[default]
    Date,
    /// Band name ascending.
    Band,
    /// Most mentioned band first.
    Count,
}

impl SortMode {
    pub(crate) const ALL: [SortMode; 3] = [SortMode::Date, SortMode::Band, SortMode::Count];

    pub(crate) fn next(self) -> Self {
        match self {
            SortMode::Date => SortMode::Band,
            SortMode::Band => SortMode::Count,
            SortMode::Count => SortMode::Date,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortMode::Date => "Date",
            SortMode::Band => "Band",
            SortMode::Count => "Count",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BandGroup {
    pub(crate) key: BandKey,
    pub(crate) episodes: Vec<Episode>,
}

impl BandGroup {
    pub(crate) fn count(&self) -> usize {
        self.episodes.len()
    }

    fn name(&self) -> &str {
        match &self.key {
            BandKey::Known(name) => name,
            BandKey::Unknown => "",
        }
    }
}

/// The shape of the tracker list, which depends on the sort mode.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EpisodeList {
    Episodes(Vec<Episode>),
    Groups {
        groups: Vec<BandGroup>,
        unknown: Option<BandGroup>,
    },
}

impl EpisodeList {
    /// Number of rows the list renders as.
    pub(crate) fn len(&self) -> usize {
        match self {
            EpisodeList::Episodes(episodes) => episodes.len(),
            EpisodeList::Groups { groups, unknown } => groups.len() + usize::from(unknown.is_some()),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The episode a row asks about, if that row lacks a known band.
    ///
    /// For the grouped unknown row that is the newest unknown episode.
    pub(crate) fn unknown_episode_at(&self, row: usize) -> Option<&Episode> {
        match self {
            EpisodeList::Episodes(episodes) => episodes.get(row).filter(|e| !e.band.is_known()),
            EpisodeList::Groups { groups, unknown } if row == groups.len() => {
                unknown.as_ref().and_then(|g| g.episodes.first())
            }
            EpisodeList::Groups { .. } => None,
        }
    }
}

/// Arranges an already filtered, date-descending episode list for display.
///
/// Grouped modes keep the unknown bucket apart so it always renders after
/// the known bands.
pub(crate) fn sort_episodes(episodes: Vec<Episode>, mode: SortMode) -> EpisodeList {
    if mode == SortMode::Date {
        return EpisodeList::Episodes(episodes);
    }

    let mut grouped = group_by_band(&episodes);
    let unknown = grouped
        .shift_remove(&BandKey::Unknown)
        .map(|episodes| BandGroup {
            key: BandKey::Unknown,
            episodes,
        });

    let mut groups: Vec<BandGroup> = grouped
        .into_iter()
        .map(|(key, episodes)| BandGroup { key, episodes })
        .collect();

    match mode {
        SortMode::Band => groups.sort_by(|a, b| a.name().cmp(b.name())),
        SortMode::Count => groups.sort_by(|a, b| b.count().cmp(&a.count())),
        SortMode::Date => {}
    }

    EpisodeList::Groups { groups, unknown }
}
