pub mod add_view;
pub mod detail_view;
pub mod list_view;
pub mod status_row;
pub mod title_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title bar + spacer
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);

    match app.view {
        View::List => list_view::render_list_view(frame, app, chunks[1]),
        View::Detail(_) => detail_view::render_detail_view(frame, app, chunks[1]),
        View::Add => add_view::render_add_view(frame, app, chunks[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
