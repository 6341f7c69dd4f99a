use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_marker_popup(app: &App, f: &mut Frame<'_>) {
    let Some(marker) = app.focused() else {
        return;
    };

    let mut lines = marker.popup.lines().into_iter();
    let mut text = Vec::new();
    if let Some(name) = lines.next() {
        text.push(TextLine::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    text.extend(lines.map(TextLine::from));

    let area = centered_rect(50, 50, f.area());
    let block = Block::default()
        .title(format!(
            "{:.5}, {:.5}",
            marker.position.lat, marker.position.lng
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(text))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
