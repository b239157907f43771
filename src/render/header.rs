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

//! Tab bar and sort mode indicator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::{
    App,
    model::{sort::SortMode, view_state::Tab},
};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(inner);

    let titles = Tab::ALL.iter().map(|tab| format!(" {} ", tab.title()));
    let tabs = Tabs::new(titles)
        .select(app.state.tab.index())
        .style(Style::default().fg(theme.status_fg))
        .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    if app.state.tab == Tab::Tracker {
        let mut spans = vec![Span::styled("Sort ", Style::default().fg(theme.status_fg))];
        for mode in SortMode::ALL {
            let style = if mode == app.state.sort {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.status_fg)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(mode.label(), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)).right_aligned(), chunks[1]);
    }
}
