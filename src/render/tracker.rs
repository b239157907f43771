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

//! The tracker tab: search input, known band gauge and the episode list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Gauge, Padding, Paragraph, Block},
};

use crate::{
    App,
    util::format::{format_percentage, plural},
};

const SEARCH_PROMPT: &str = "Search bands: ";

pub(crate) fn draw_tracker(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_search(f, chunks[0], app);
    draw_known_gauge(f, chunks[1], app);

    let list = &app.derived.tracker.list;
    app.episode_table.draw(f, chunks[3], list, &app.theme);
}

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let search = &app.search_bar;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let value_style = if search.active() {
        Style::default().fg(theme.table_title_fg).bg(theme.gauge_track_colour)
    } else {
        Style::default().fg(theme.table_title_fg)
    };

    let line = Line::from(vec![
        Span::styled(SEARCH_PROMPT, Style::default().fg(theme.accent_colour)),
        Span::styled(search.value(), value_style),
    ]);
    f.render_widget(Paragraph::new(line), columns[0]);

    let matching = plural(app.derived.tracker.matching, "episode");
    f.render_widget(Paragraph::new(matching).right_aligned().fg(theme.status_fg), columns[1]);

    if search.active() {
        let cursor_x = columns[0].x + (SEARCH_PROMPT.len() + search.input.visual_cursor()) as u16;
        f.set_cursor_position((cursor_x, columns[0].y));
    }
}

fn draw_known_gauge(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let percentage = app.derived.tracker.known_percentage.clamp(0.0, 100.0);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0), Constraint::Length(7)])
        .split(area);

    f.render_widget(Paragraph::new("Known bands").fg(theme.status_fg), columns[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(percentage / 100.0)
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, columns[1]);

    f.render_widget(
        Paragraph::new(format_percentage(percentage)).right_aligned().fg(Color::White),
        columns[2],
    );
}
