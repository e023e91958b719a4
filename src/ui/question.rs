use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::{QuestionState, Verdict};
use crate::models::{Choice, MediaKind, QuestionVariant};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.focused_controller();
    let question = controller.question();
    let options = app.active_session().options();
    let answered = controller.state() == QuestionState::Answered;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        question.text.clone(),
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(""));

    if let Some(media) = &question.media {
        let tag = match media.kind {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        };
        let alt = media.alt.as_deref().unwrap_or("");
        lines.push(Line::from(Span::styled(
            format!("[{}] {}  {}", tag, media.src, alt),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if let Some(err) = controller.config_error() {
        lines.push(Line::from(Span::styled(
            format!("This question cannot be graded: {}.", err),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
        return;
    }

    match question.variant {
        QuestionVariant::FillInBlank => {
            render_input(&mut lines, app, answered, controller.verdict())
        }
        _ => render_choices(&mut lines, app, answered, controller.verdict()),
    }

    if options.show_hints && controller.hint_visible() {
        lines.push(Line::from(""));
        let hint = question.hint.as_deref().unwrap_or("No hint for this question.");
        lines.push(Line::from(Span::styled(
            format!("Hint: {}", hint),
            Style::default().fg(Color::Yellow),
        )));
    }

    if answered {
        push_feedback(&mut lines, question.variant, app);
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_choices(lines: &mut Vec<Line>, app: &App, answered: bool, verdict: Option<&Verdict>) {
    let controller = app.focused_controller();
    let question = controller.question();
    let edit = app.focused_edit();
    let multi = question.variant == QuestionVariant::MultiSelect;

    for (index, choice) in question.choices.iter().enumerate() {
        let selected_verdict =
            verdict.and_then(|v| v.choices.iter().find(|c| c.choice_id == choice.id));

        let style = match (answered, selected_verdict) {
            (true, Some(v)) if v.correct => Style::default().fg(Color::Green).bold(),
            (true, Some(_)) => Style::default().fg(Color::Red).bold(),
            (true, None) => Style::default().fg(Color::DarkGray),
            (false, _) if index == edit.cursor => Style::default().fg(Color::Cyan).bold(),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if !answered && index == edit.cursor {
            ">"
        } else {
            " "
        };

        let mut spans = vec![Span::styled(format!(" {} ", marker), style)];
        if multi {
            let checked = if answered {
                selected_verdict.is_some()
            } else {
                edit.checked.contains(&choice.id)
            };
            let tick = if checked { "[x] " } else { "[ ] " };
            spans.push(Span::styled(tick, style));
        }
        spans.push(Span::styled(choice.text.clone(), style));

        // Per-choice feedback for the choices the learner picked.
        if answered && selected_verdict.is_some() {
            if let Some(feedback) = &choice.feedback {
                spans.push(Span::styled(
                    format!("  — {}", feedback),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
}

fn render_input(lines: &mut Vec<Line>, app: &App, answered: bool, verdict: Option<&Verdict>) {
    let edit = app.focused_edit();

    let style = match verdict {
        Some(v) if v.correct => Style::default().fg(Color::Green).bold(),
        Some(_) => Style::default().fg(Color::Red).bold(),
        None => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![
        Span::styled("Answer: ", Style::default().fg(Color::White)),
        Span::styled(edit.input.clone(), style),
    ];
    if !answered {
        spans.push(Span::styled("_", style));
    }
    lines.push(Line::from(spans));
}

fn push_feedback(lines: &mut Vec<Line>, variant: QuestionVariant, app: &App) {
    let controller = app.focused_controller();
    let Some(verdict) = controller.verdict() else {
        return;
    };

    let (text, color) = if verdict.correct {
        ("Correct!".to_string(), Color::Green)
    } else {
        ("Incorrect!".to_string(), Color::Red)
    };

    // Single-choice feedback is the clicked choice's own text, whatever
    // the verdict, falling back to the fixed strings.
    let text = match variant {
        QuestionVariant::SingleChoice | QuestionVariant::TrueFalse => verdict
            .choices
            .first()
            .and_then(|v| selected_feedback(controller.question().choices.as_slice(), &v.choice_id))
            .unwrap_or(text),
        _ => text,
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text,
        Style::default().fg(color).bold(),
    )));
}

fn selected_feedback(choices: &[Choice], choice_id: &str) -> Option<String> {
    choices
        .iter()
        .find(|c| c.id == choice_id)
        .and_then(|c| c.feedback.clone())
}
