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

//! Bottom status line: the last share link, or the key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, model::view_state::Tab};

const TRACKER_HINTS: &str = "/ search  s sort  o ask which band  1/2 tabs  q quit";
const STATS_HINTS: &str = "1/2 tabs  q quit";
const SEARCH_HINTS: &str = "Enter done  Esc done";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let text = match (&app.status, app.search_bar.active(), app.state.tab) {
        (_, true, _) => SEARCH_HINTS,
        (Some(status), false, Tab::Tracker) => status.as_str(),
        (_, false, Tab::Tracker) => TRACKER_HINTS,
        (_, false, Tab::Stats) => STATS_HINTS,
    };

    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(app.theme.status_fg)
                .bg(app.theme.gauge_track_colour),
        ),
        container[0],
    );
}
