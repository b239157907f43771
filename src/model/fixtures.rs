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

//! Episode builders shared by the unit tests.

use crate::model::{Band, Episode};

pub(crate) fn episode(id: &str, band: &str, published: &str) -> Episode {
    Episode::new(
        id,
        &format!("Episode {id}"),
        published,
        Band::from_raw(Some(band.to_string())),
    )
}

/// The three episode example: two Wilco mentions around one unresolved band,
/// already in date-descending order.
pub(crate) fn wilco() -> Vec<Episode> {
    vec![
        episode("3", "Wilco", "2023-03-01"),
        episode("2", "<unknown>", "2023-02-01"),
        episode("1", "Wilco", "2023-01-01"),
    ]
}

/// A larger date-descending dataset with ties, unknowns and one-off bands.
pub(crate) fn mixed() -> Vec<Episode> {
    vec![
        episode("10", "Big Thief", "2024-05-01"),
        episode("9", "", "2024-04-01"),
        episode("8", "Wilco", "2024-03-01"),
        episode("7", "Big Thief", "2024-02-01"),
        episode("6", "<error>", "2024-01-01"),
        episode("5", "Alvvays", "2023-12-01"),
        episode("4", "Wilco", "2023-11-01"),
        episode("3", "Yo La Tengo", "2023-10-01"),
        episode("2", "Big Thief", "2023-09-01"),
        episode("1", "wilco", "2023-08-01"),
    ]
}
