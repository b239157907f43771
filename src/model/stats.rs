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

//! Band filtering, grouping and aggregation.
//!
//! Everything here is a pure function of an episode slice. The view layer
//! calls these afresh whenever the search term or sort mode changes, so there
//! is no cached state to keep in step with the episode list.

use indexmap::IndexMap;

use crate::model::{BandKey, Episode};

/// Episodes partitioned by band, in first-encountered order.
pub(crate) type BandGroups = IndexMap<BandKey, Vec<Episode>>;

/// Known band name to number of episodes featuring it, in first-encountered
/// order.
pub(crate) type BandCounts = IndexMap<String, usize>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BandMention {
    pub(crate) name: String,
    pub(crate) count: usize,
}

/// Summary statistics shown on the stats tab.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BandStats {
    pub(crate) total_episodes: usize,
    pub(crate) known_episodes: usize,
    pub(crate) distinct_bands: usize,
    pub(crate) known_percentage: f64,
    pub(crate) most_mentioned: Option<BandMention>,
    pub(crate) least_mentioned: Option<BandMention>,
    pub(crate) one_off_percentage: f64,
    pub(crate) most_recent: Option<Episode>,
}

impl BandStats {
    /// Derives the statistics for a date-descending episode list.
    pub(crate) fn derive(episodes: &[Episode]) -> Self {
        let counts = count_by_band(episodes);
        let known_episodes = counts.values().sum();

        Self {
            total_episodes: episodes.len(),
            known_episodes,
            distinct_bands: counts.len(),
            known_percentage: percentage(counts.len(), known_episodes),
            most_mentioned: most_mentioned(&counts),
            least_mentioned: least_mentioned(&counts),
            one_off_percentage: one_off_percentage(&counts),
            most_recent: most_recent_known(episodes).cloned(),
        }
    }

    pub(crate) fn unknown_episodes(&self) -> usize {
        self.total_episodes - self.known_episodes
    }
}

/// Keeps the episodes whose band contains `term`, ignoring case.
///
/// A blank term keeps everything. Unresolved bands are matched on their
/// source text, so searching for `<` finds them.
pub(crate) fn filter_by_band(episodes: &[Episode], term: &str) -> Vec<Episode> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return episodes.to_vec();
    }

    episodes
        .iter()
        .filter(|e| e.band.source_text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Partitions episodes by band, collecting every episode without a known band
/// under [`BandKey::Unknown`].
pub(crate) fn group_by_band(episodes: &[Episode]) -> BandGroups {
    let mut groups = BandGroups::new();
    for episode in episodes {
        groups
            .entry(BandKey::from(&episode.band))
            .or_default()
            .push(episode.clone());
    }
    groups
}

/// Counts mentions per known band. Episodes without a known band are not
/// counted.
pub(crate) fn count_by_band(episodes: &[Episode]) -> BandCounts {
    let mut counts = BandCounts::new();
    for name in episodes.iter().filter_map(|e| e.band.name()) {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Distinct known bands as a percentage of known-band episodes.
///
/// Zero when there are no known-band episodes.
pub(crate) fn known_percentage(episodes: &[Episode]) -> f64 {
    let counts = count_by_band(episodes);
    percentage(counts.len(), counts.values().sum())
}

/// The band with the most mentions. Ties go to the band seen first.
pub(crate) fn most_mentioned(counts: &BandCounts) -> Option<BandMention> {
    superlative(counts, |candidate, best| candidate > best)
}

/// The band with the fewest mentions. Ties go to the band seen first.
pub(crate) fn least_mentioned(counts: &BandCounts) -> Option<BandMention> {
    superlative(counts, |candidate, best| candidate < best)
}

fn superlative(counts: &BandCounts, better: impl Fn(usize, usize) -> bool) -> Option<BandMention> {
    let mut best: Option<(&String, usize)> = None;
    for (name, &count) in counts {
        match best {
            Some((_, best_count)) if !better(count, best_count) => {}
            _ => best = Some((name, count)),
        }
    }

    best.map(|(name, count)| BandMention {
        name: name.clone(),
        count,
    })
}

/// Bands mentioned exactly once, as a percentage of all distinct bands.
pub(crate) fn one_off_percentage(counts: &BandCounts) -> f64 {
    let one_offs = counts.values().filter(|&&c| c == 1).count();
    percentage(one_offs, counts.len())
}

/// The newest episode with a known band, given a date-descending list.
pub(crate) fn most_recent_known(episodes: &[Episode]) -> Option<&Episode> {
    episodes.iter().find(|e| e.band.is_known())
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::model::fixtures::{self, episode};

    fn ids(episodes: &[Episode]) -> Vec<&str> {
        episodes.iter().map(|e| e.id.as_str()).collect()
    }

    fn mention(name: &str, count: usize) -> Option<BandMention> {
        Some(BandMention {
            name: name.to_string(),
            count,
        })
    }

    #[test]
    fn counts_only_known_bands() {
        let counts = count_by_band(&fixtures::wilco());

        assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![("Wilco".to_string(), 2)]);
    }

    #[test]
    fn known_percentage_of_example() {
        assert_eq!(known_percentage(&fixtures::wilco()), 50.0);
    }

    #[test]
    fn empty_dataset_has_zeroed_stats() {
        let stats = BandStats::derive(&[]);

        assert_eq!(stats.known_percentage, 0.0);
        assert_eq!(stats.one_off_percentage, 0.0);
        assert_eq!(stats.most_mentioned, None);
        assert_eq!(stats.least_mentioned, None);
        assert_eq!(stats.most_recent, None);
        assert_eq!(stats.unknown_episodes(), 0);
    }

    #[test]
    fn all_unknown_dataset_has_zero_percentage() {
        let episodes = vec![episode("1", "<band>", "2023-01-01"), episode("2", "", "2023-01-02")];
        let stats = BandStats::derive(&episodes);

        assert_eq!(stats.known_percentage, 0.0);
        assert_eq!(stats.unknown_episodes(), 2);
        assert_eq!(stats.most_recent, None);
    }

    #[test]
    fn derives_superlatives() {
        let stats = BandStats::derive(&fixtures::mixed());

        assert_eq!(stats.total_episodes, 10);
        assert_eq!(stats.known_episodes, 8);
        assert_eq!(stats.distinct_bands, 5);
        assert_eq!(stats.known_percentage, 62.5);
        assert_eq!(stats.most_mentioned, mention("Big Thief", 3));
        assert_eq!(stats.least_mentioned, mention("Alvvays", 1));
        assert_eq!(stats.one_off_percentage, 60.0);
        assert_eq!(stats.most_recent.map(|e| e.id), Some("10".to_string()));
    }

    #[test]
    fn superlative_ties_go_to_first_seen() {
        let episodes = vec![
            episode("4", "B", "2023-04-01"),
            episode("3", "A", "2023-03-01"),
            episode("2", "A", "2023-02-01"),
            episode("1", "B", "2023-01-01"),
        ];
        let counts = count_by_band(&episodes);

        assert_eq!(most_mentioned(&counts), mention("B", 2));
        assert_eq!(least_mentioned(&counts), mention("B", 2));
    }

    #[test]
    fn most_recent_skips_unknown_bands() {
        let episodes = fixtures::mixed();
        let recent = most_recent_known(&episodes[1..]).map(|e| e.id.as_str());

        assert_eq!(recent, Some("8"));
    }

    #[rstest]
    #[case("", vec!["10", "9", "8", "7", "6", "5", "4", "3", "2", "1"])]
    #[case("   ", vec!["10", "9", "8", "7", "6", "5", "4", "3", "2", "1"])]
    #[case("wilco", vec!["8", "4", "1"])]
    #[case("THIEF", vec!["10", "7", "2"])]
    #[case("<", vec!["6"])]
    #[case("nobody", vec![])]
    fn filters_by_band(#[case] term: &str, #[case] expected: Vec<&str>) {
        let episodes = fixtures::mixed();

        assert_eq!(ids(&filter_by_band(&episodes, term)), expected);
    }

    #[test]
    fn groups_unknowns_into_one_bucket() {
        let groups = group_by_band(&fixtures::mixed());
        let keys: Vec<String> = groups.keys().map(|k| k.to_string()).collect();

        assert_eq!(keys, vec!["Big Thief", "(unknown band)", "Wilco", "Alvvays", "Yo La Tengo", "wilco"]);
        assert_eq!(ids(&groups[&BandKey::Unknown]), vec!["9", "6"]);
    }

    fn arb_episodes() -> impl Strategy<Value = Vec<Episode>> {
        let bands = vec!["Wilco", "wilco", "Big Thief", "Alvvays", "", "<band>", "<error>", "Low"];
        prop::collection::vec((prop::sample::select(bands), 0u32..2000), 0..40).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (band, day))| {
                    let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                        + chrono::Days::new(u64::from(day));
                    episode(&i.to_string(), band, &date.format("%Y-%m-%d").to_string())
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn known_percentage_is_bounded(episodes in arb_episodes()) {
            let pct = known_percentage(&episodes);
            prop_assert!((0.0..=100.0).contains(&pct));
            if !episodes.iter().any(|e| e.band.is_known()) {
                prop_assert_eq!(pct, 0.0);
            }
        }

        #[test]
        fn filtering_is_idempotent(episodes in arb_episodes(), term in "[a-zA-Z<> ]{0,4}") {
            let once = filter_by_band(&episodes, &term);
            let twice = filter_by_band(&once, &term);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn groups_partition_the_input(episodes in arb_episodes(), term in "[a-z]{0,2}") {
            let filtered = filter_by_band(&episodes, &term);
            let groups = group_by_band(&filtered);

            let mut grouped: Vec<&str> = groups.values().flatten().map(|e| e.id.as_str()).collect();
            let mut expected: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
            grouped.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(grouped, expected);
        }
    }
}
