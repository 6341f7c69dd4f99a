// UI module for the property map viewer
// Owner panel on the left, map on the right, status line underneath

pub mod map;
pub mod panel;
pub mod popup;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(rows[0]);

    panel::render_owner_panel(app, f, columns[0]);
    map::render_map(app, f, columns[1]);
    panel::render_status_line(app, f, rows[1]);

    if app.show_popup {
        popup::render_marker_popup(app, f);
    }
}
