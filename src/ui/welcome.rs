use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let box_height = app.sessions().len() as u16 + 8;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(box_height),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZZES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for (index, session) in app.sessions().iter().enumerate() {
        let is_selected = index == app.active_index();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let status = if session.is_complete() {
            format!("  ·  {} / {}", session.score(), session.total())
        } else {
            String::new()
        };

        content.push(Line::from(Span::styled(
            format!(
                " {} {}  ({} questions){}",
                marker,
                session.id(),
                session.controllers().len(),
                status
            ),
            style,
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "j/k select  ·  enter open  ·  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
