use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let bounds = app.controller.host().options().max_bounds;
    let markers = app.markers();

    let coords: Vec<(f64, f64)> = markers
        .iter()
        .map(|marker| (marker.position.lng, marker.position.lat))
        .collect();
    let color = markers.front().map_or(Color::Blue, |marker| marker.color);
    let focused = app.focused().map(|marker| marker.position);

    let block = Block::default()
        .title(format!("Properties ({})", markers.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let canvas = Canvas::default()
        .block(block)
        .marker(ratatui::symbols::Marker::Braille)
        .x_bounds([bounds.south_west.lng, bounds.north_east.lng])
        .y_bounds([bounds.south_west.lat, bounds.north_east.lat])
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::Gray,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
            if let Some(position) = focused {
                ctx.draw(&Circle {
                    x: position.lng,
                    y: position.lat,
                    radius: 0.4,
                    color: Color::Yellow,
                });
            }
        });

    f.render_widget(canvas, area);
}
