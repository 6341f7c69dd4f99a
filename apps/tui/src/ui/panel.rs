use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_owner_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let panel = app.controller.filter_panel();
    let block = Block::default()
        .title("Owner")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if panel.is_empty() {
        let paragraph = Paragraph::new("No owners")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem<'_>> = panel
        .toggles
        .iter()
        .map(|toggle| {
            let mark = if toggle.checked { "[x] " } else { "[ ] " };
            ListItem::new(TextLine::from(vec![
                Span::styled(mark, Style::default().fg(Color::Cyan)),
                Span::raw(toggle.label.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.owner_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let summary = app.controller.last_render();
    let selected = app.controller.selection().len();
    let filter = if selected == 0 {
        "all owners".to_string()
    } else {
        format!("{selected} owner(s)")
    };

    let line = TextLine::from(vec![
        Span::raw(format!(
            "{} markers, {} without coordinates, {filter}  ",
            summary.drawn, summary.skipped
        )),
        Span::styled(
            "↑/↓ Space c Tab Enter q",
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
