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

//! Episode dataset loading.
//!
//! The dataset is produced elsewhere and shipped as a JSON array of episode
//! objects. A copy is embedded in the binary; the configuration or the command
//! line may point at a newer file instead.
//!
//! Loading never fails from the caller's point of view: any problem is logged
//! and an empty episode list is returned, which the UI presents as an empty
//! tracker.

use std::{cmp::Ordering, fs, path::PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::model::Episode;

const EMBEDDED_DATASET: &str = include_str!("../../data/episodes.json");

#[derive(Debug, Error)]
pub(crate) enum DatasetError {
    #[error("failed to read dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    fn read(&self) -> Result<String, DatasetError> {
        match self {
            DatasetSource::Embedded => Ok(EMBEDDED_DATASET.to_string()),
            DatasetSource::File(path) => fs::read_to_string(path).map_err(|source| DatasetError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Loads the dataset, falling back to an empty list on any failure.
pub(crate) fn load_episodes(source: &DatasetSource) -> Vec<Episode> {
    match source.read().and_then(|json| parse_episodes(&json)) {
        Ok(episodes) => {
            info!(?source, count = episodes.len(), "loaded episode dataset");
            episodes
        }
        Err(err) => {
            warn!(?source, error = %err, "unable to load episode dataset, continuing with none");
            vec![]
        }
    }
}

/// Parses a JSON episode array and orders it newest first.
pub(crate) fn parse_episodes(json: &str) -> Result<Vec<Episode>, DatasetError> {
    let mut episodes: Vec<Episode> = serde_json::from_str(json)?;
    sort_by_published(&mut episodes);
    Ok(episodes)
}

/// Sorts episodes descending by published timestamp.
///
/// The sort is stable. Episodes whose timestamp could not be parsed go after
/// all dated episodes, in their original order.
pub(crate) fn sort_by_published(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Band;

    fn ids(episodes: &[Episode]) -> Vec<&str> {
        episodes.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn parses_and_orders_newest_first() {
        let json = r#"[
            {"id": 1, "title": "One", "published": "2023-01-01", "band": "Wilco"},
            {"id": 2, "title": "Two", "published": "2023-02-01", "band": "<unknown>"},
            {"id": 3, "title": "Three", "published": "2023-03-01", "band": "Wilco"}
        ]"#;

        let episodes = parse_episodes(json).unwrap();

        assert_eq!(ids(&episodes), vec!["3", "2", "1"]);
        assert_eq!(episodes[1].band, Band::Unresolved("<unknown>".into()));
    }

    #[test]
    fn undated_episodes_sort_last_in_source_order() {
        let json = r#"[
            {"id": "a", "title": "A", "published": "soon", "band": "X"},
            {"id": "b", "title": "B", "published": "2023-01-01T00:00:00Z", "band": "Y"},
            {"id": "c", "title": "C", "published": "", "band": "Z"},
            {"id": "d", "title": "D", "published": "2024-01-01T00:00:00Z", "band": "W"}
        ]"#;

        let episodes = parse_episodes(json).unwrap();

        assert_eq!(ids(&episodes), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_episodes("{\"id\": 1}"), Err(DatasetError::Parse(_))));
        assert!(matches!(parse_episodes("not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        assert!(parse_episodes("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let source = DatasetSource::File(PathBuf::from("/nonexistent/bandtracker/episodes.json"));
        assert!(load_episodes(&source).is_empty());
    }

    #[test]
    fn embedded_dataset_is_well_formed() {
        let episodes = parse_episodes(EMBEDDED_DATASET).unwrap();

        assert!(!episodes.is_empty());
        assert!(episodes.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }
}
