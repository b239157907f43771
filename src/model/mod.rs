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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the podcast
//! [`Episode`] and the [`Band`] featured in it, together with the derived view
//! models computed from them.

pub(crate) mod dataset;
pub(crate) mod sort;
pub(crate) mod stats;
pub(crate) mod view_state;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Label used for the bucket holding every episode without a known band.
///
/// Parenthesised so it cannot be mistaken for a band called "Unknown".
pub(crate) const UNKNOWN_LABEL: &str = "(unknown band)";

/// The band featured in an episode.
///
/// The source data marks unresolved values with templating characters (for
/// example `<band>` or `<error>`); that check happens once, in
/// [`Band::from_raw`], and everything downstream matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Band {
    Known(String),
    Unresolved(String),
    Missing,
}

impl Band {
    pub(crate) fn from_raw(raw: Option<String>) -> Self {
        match raw {
            None => Band::Missing,
            Some(s) if s.is_empty() => Band::Missing,
            Some(s) if s.contains(['<', '>']) => Band::Unresolved(s),
            Some(s) => Band::Known(s),
        }
    }

    pub(crate) fn is_known(&self) -> bool {
        matches!(self, Band::Known(_))
    }

    /// The band name, only for a known band.
    pub(crate) fn name(&self) -> Option<&str> {
        match self {
            Band::Known(name) => Some(name),
            _ => None,
        }
    }

    /// The text as it appeared in the source, used for search matching.
    pub(crate) fn source_text(&self) -> &str {
        match self {
            Band::Known(s) | Band::Unresolved(s) => s,
            Band::Missing => "",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Known(name) => f.write_str(name),
            _ => f.write_str(UNKNOWN_LABEL),
        }
    }
}

/// Grouping key: a known band name, or the single bucket for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum BandKey {
    Known(String),
    Unknown,
}

impl From<&Band> for BandKey {
    fn from(band: &Band) -> Self {
        match band {
            Band::Known(name) => BandKey::Known(name.clone()),
            _ => BandKey::Unknown,
        }
    }
}

impl fmt::Display for BandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandKey::Known(name) => f.write_str(name),
            BandKey::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}

/// A single podcast episode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEpisode")]
pub(crate) struct Episode {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) published: String,
    pub(crate) published_at: Option<DateTime<Utc>>,
    pub(crate) band: Band,
}

impl Episode {
    #[cfg(test)]
    pub(crate) fn new(id: &str, title: &str, published: &str, band: Band) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            published: published.to_string(),
            published_at: parse_published(published),
            band,
        }
    }
}

// Episode identifiers are strings, but hand-edited datasets use numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct RawEpisode {
    id: RawId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    published: String,
    #[serde(default)]
    band: Option<String>,
}

impl From<RawEpisode> for Episode {
    fn from(raw: RawEpisode) -> Self {
        let id = match raw.id {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };

        Self {
            id,
            published_at: parse_published(&raw.published),
            title: raw.title,
            published: raw.published,
            band: Band::from_raw(raw.band),
        }
    }
}

/// Parses a published timestamp.
///
/// Accepts RFC 3339, RFC 2822 (the format podcast feeds use) and a bare
/// `YYYY-MM-DD` date, which is taken as midnight UTC.
pub(crate) fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}
