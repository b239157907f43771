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

use crate::model::Episode;

/// Formats an episode's air date as `YYYY-MM-DD`.
///
/// Falls back to the raw source text when the timestamp could not be parsed,
/// and to `-` when there was none.
pub(crate) fn format_published(episode: &Episode) -> String {
    match episode.published_at {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None if episode.published.trim().is_empty() => "-".to_string(),
        None => episode.published.clone(),
    }
}

/// Formats a percentage with at most one decimal place, so `50.0` becomes
/// `50%` and `62.5` stays `62.5%`.
pub(crate) fn format_percentage(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// Pluralises a count, `1 episode` / `3 episodes`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::{Band, fixtures::episode};

    #[rstest]
    #[case(0.0, "0%")]
    #[case(50.0, "50%")]
    #[case(62.5, "62.5%")]
    #[case(100.0 / 3.0, "33.3%")]
    #[case(100.0, "100%")]
    fn formats_percentages(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percentage(value), expected);
    }

    #[test]
    fn formats_published_dates() {
        assert_eq!(format_published(&episode("1", "Wilco", "Wed, 01 Mar 2023 10:00:00 +0000")), "2023-03-01");
        assert_eq!(format_published(&episode("2", "Wilco", "someday")), "someday");
        assert_eq!(format_published(&Episode::new("3", "T", "", Band::Missing)), "-");
    }

    #[test]
    fn pluralises() {
        assert_eq!(plural(1, "episode"), "1 episode");
        assert_eq!(plural(0, "mention"), "0 mentions");
    }
}
