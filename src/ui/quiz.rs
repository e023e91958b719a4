use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::app::App;
use crate::engine::QuestionState;
use crate::models::QuestionVariant;

use super::question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.active_session();
    let options = session.options();

    let mut constraints = vec![Constraint::Length(1)];
    if options.show_progress {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Fill(1));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).margin(1).split(area);

    render_header(frame, chunks[0], app);

    let mut next = 1;
    if options.show_progress {
        render_progress(frame, chunks[next], app);
        next += 1;
    }

    question::render(frame, chunks[next], app);

    if options.show_score && session.is_complete() {
        render_score(frame, chunks[next + 1], app);
    }
    render_controls(frame, chunks[next + 2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.active_session();
    let title = Paragraph::new(session.id().to_string()).fg(Color::Cyan).bold();
    frame.render_widget(title, area);

    let position = format!(
        "question {}/{}",
        app.focused_index() + 1,
        session.controllers().len()
    );
    let widget = Paragraph::new(position)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.active_session();
    let widget = Gauge::default()
        .ratio(session.progress())
        .label(format!(
            "{}/{}",
            session.answered_count(),
            session.total()
        ))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.active_session();
    let widget = Paragraph::new(format!(
        "Score: {} / {}",
        session.score(),
        session.total()
    ))
    .alignment(Alignment::Center)
    .fg(Color::Green)
    .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.focused_controller();
    let options = app.active_session().options();
    let answered = controller.state() == QuestionState::Answered;

    let mut parts: Vec<&str> = Vec::new();
    if !answered && controller.is_gradable() {
        match controller.question().variant {
            QuestionVariant::SingleChoice | QuestionVariant::TrueFalse => {
                parts.extend(["j/k move", "enter answer"]);
            }
            QuestionVariant::MultiSelect => {
                parts.extend(["j/k move", "space toggle", "enter submit"]);
            }
            QuestionVariant::FillInBlank => {
                parts.extend(["type answer", "enter submit"]);
            }
        }
    }
    parts.push("tab next");
    if options.show_hints && !app.is_editing() {
        parts.push("h hint");
    }
    if options.show_refresh && !app.is_editing() {
        parts.push("r reset");
    }
    parts.push("esc back");
    if !app.is_editing() {
        parts.push("q quit");
    }

    let widget = Paragraph::new(parts.join("  ·  "))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
