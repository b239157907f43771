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

//! UI rendering logic for the episode table.
//!
//! Date order renders one row per episode; the grouped sort modes render one
//! row per band with the unknown bucket last.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::EpisodeTable,
    model::{
        Episode,
        sort::{BandGroup, EpisodeList},
    },
    theme::Theme,
    util::format::{format_published, plural},
};

const ASK_HINT: &str = "o: ask which band";

impl EpisodeTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, list: &EpisodeList, theme: &Theme) {
        if list.is_empty() {
            let empty = Paragraph::new("No episodes match")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.status_fg));
            f.render_widget(empty, area);
            return;
        }

        let table = match list {
            EpisodeList::Episodes(episodes) => episode_table(episodes, theme),
            EpisodeList::Groups { groups, unknown } => group_table(groups, unknown.as_ref(), theme),
        };

        let table = table
            .row_highlight_style(Style::default().bg(theme.highlight_bg).add_modifier(Modifier::BOLD))
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn header(cells: Vec<Cell<'static>>, theme: &Theme) -> Row<'static> {
    Row::new(cells)
        .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
        .bottom_margin(1)
}

fn episode_table<'a>(episodes: &'a [Episode], theme: &Theme) -> Table<'a> {
    let rows = episodes.iter().map(|episode| {
        let (band, hint) = match episode.band.name() {
            Some(name) => (Line::from(name).style(Style::default().fg(theme.table_band_fg)), Line::from("")),
            None => (
                Line::from(episode.band.to_string()).style(Style::default().fg(theme.table_unknown_fg)),
                Line::from(ASK_HINT).style(Style::default().fg(theme.status_fg)),
            ),
        };

        Row::new(vec![
            Cell::from(Line::from(format_published(episode)).style(Style::default().fg(theme.table_date_fg))),
            Cell::from(band),
            Cell::from(Line::from(episode.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
            Cell::from(hint),
        ])
    });

    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
            Constraint::Length(ASK_HINT.len() as u16),
        ],
    )
    .header(header(
        vec![Cell::from("Date"), Cell::from("Band"), Cell::from("Episode"), Cell::from("")],
        theme,
    ))
    .column_spacing(2)
}

fn group_table<'a>(groups: &'a [BandGroup], unknown: Option<&'a BandGroup>, theme: &Theme) -> Table<'a> {
    let rows = groups
        .iter()
        .map(|group| group_row(group, theme.table_band_fg, theme))
        .chain(unknown.map(|group| group_row(group, theme.table_unknown_fg, theme)));

    Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header(
        vec![
            Cell::from("Band"),
            Cell::from(Line::from("Mentions").alignment(Alignment::Right)),
            Cell::from("Latest"),
            Cell::from("Episodes"),
        ],
        theme,
    ))
    .column_spacing(2)
}

fn group_row<'a>(group: &'a BandGroup, band_fg: ratatui::style::Color, theme: &Theme) -> Row<'a> {
    let latest = group.episodes.first().map(format_published).unwrap_or_default();
    let titles = group
        .episodes
        .iter()
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Row::new(vec![
        Cell::from(Line::from(group.key.to_string()).style(Style::default().fg(band_fg))),
        Cell::from(
            Line::from(plural(group.count(), "episode"))
                .style(Style::default().fg(theme.table_count_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(Line::from(latest).style(Style::default().fg(theme.table_date_fg))),
        Cell::from(Line::from(titles).style(Style::default().fg(theme.table_title_fg))),
    ])
}
