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

//! UI rendering logic for the stats tab.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    App,
    model::stats::{BandMention, BandStats},
    theme::Theme,
    util::format::{format_percentage, format_published, plural},
};

pub(crate) fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.derived.stats;
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let header = Paragraph::new(format!(
        "{} tracked | {} with a known band",
        plural(stats.total_episodes, "episode"),
        stats.known_episodes
    ))
    .block(header_block);
    f.render_widget(header, chunks[0]);

    let rows = stat_rows(stats, theme).into_iter().map(|(label, value)| {
        Row::new(vec![
            Cell::from(Line::from(label).alignment(Alignment::Right).style(Style::default().fg(theme.status_fg))),
            Cell::from(value),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(20)])
        .block(Block::default().padding(Padding::uniform(1)))
        .column_spacing(2);
    f.render_widget(table, chunks[1]);

    if stats.unknown_episodes() > 0 {
        let call_to_action = Line::from(vec![
            Span::styled(
                format!("{} still missing a band. ", plural(stats.unknown_episodes(), "episode")),
                Style::default().fg(theme.table_unknown_fg),
            ),
            Span::styled(
                "Find them on the Tracker tab and press o to ask.",
                Style::default().fg(theme.status_fg),
            ),
        ]);
        f.render_widget(
            Paragraph::new(call_to_action).block(Block::default().padding(Padding::horizontal(1))),
            chunks[2],
        );
    }
}

fn stat_rows(stats: &BandStats, theme: &Theme) -> Vec<(&'static str, Line<'static>)> {
    vec![
        ("Distinct bands", Line::from(stats.distinct_bands.to_string())),
        ("Known bands", Line::from(format_percentage(stats.known_percentage))),
        ("Most mentioned", mention_line(stats.most_mentioned.as_ref(), theme)),
        ("Least mentioned", mention_line(stats.least_mentioned.as_ref(), theme)),
        ("One-off bands", Line::from(format_percentage(stats.one_off_percentage))),
        (
            "Most recent mention",
            stats.most_recent.as_ref().map_or_else(none_line, |e| {
                Line::from(vec![
                    Span::styled(e.band.to_string(), Style::default().fg(theme.table_band_fg).add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" on \"{}\" ({})", e.title, format_published(e))),
                ])
            }),
        ),
    ]
}

fn mention_line(mention: Option<&BandMention>, theme: &Theme) -> Line<'static> {
    match mention {
        Some(m) => Line::from(vec![
            Span::styled(m.name.clone(), Style::default().fg(theme.table_band_fg).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", plural(m.count, "mention"))),
        ]),
        None => none_line(),
    }
}

fn none_line() -> Line<'static> {
    Line::from("-")
}
