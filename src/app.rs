//! Page-level presentation state.
//!
//! The app owns the quiz sessions plus everything that is purely about
//! editing: choice cursors, multi-select checkboxes and the
//! fill-in-the-blank input buffer. Edits become a core selection only at
//! submit time; the core never sees a half-typed answer.

use std::collections::HashSet;

use log::debug;

use crate::engine::{QuestionController, QuestionState, QuizSession, Response};
use crate::events::QuizEvent;
use crate::models::{Quiz, QuestionVariant};

const MAX_INPUT_LENGTH: usize = 80;

/// Which screen the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
}

/// Transient edit state for one question. Adapter-owned; cleared on reset.
#[derive(Default)]
pub struct QuestionEdit {
    /// Highlighted choice index.
    pub cursor: usize,
    /// Checked choice ids (multi-select only).
    pub checked: HashSet<String>,
    /// Typed answer (fill-in-the-blank only).
    pub input: String,
}

pub struct App {
    pub state: AppState,
    sessions: Vec<QuizSession>,
    edits: Vec<Vec<QuestionEdit>>,
    active: usize,
    focused: usize,
}

impl App {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let sessions: Vec<QuizSession> = quizzes.into_iter().map(QuizSession::new).collect();
        let edits = sessions
            .iter()
            .map(|s| s.controllers().iter().map(|_| QuestionEdit::default()).collect())
            .collect();

        Self {
            state: AppState::Welcome,
            sessions,
            edits,
            active: 0,
            focused: 0,
        }
    }

    pub fn sessions(&self) -> &[QuizSession] {
        &self.sessions
    }

    /// The quiz highlighted on the welcome screen / open on the quiz screen.
    pub fn active_session(&self) -> &QuizSession {
        &self.sessions[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_controller(&self) -> &QuestionController {
        &self.active_session().controllers()[self.focused]
    }

    pub fn focused_edit(&self) -> &QuestionEdit {
        &self.edits[self.active][self.focused]
    }

    fn focused_edit_mut(&mut self) -> &mut QuestionEdit {
        &mut self.edits[self.active][self.focused]
    }

    // --- welcome screen ---

    pub fn select_next_quiz(&mut self) {
        self.active = (self.active + 1) % self.sessions.len();
    }

    pub fn select_previous_quiz(&mut self) {
        let n = self.sessions.len();
        self.active = (self.active + n - 1) % n;
    }

    pub fn open_selected(&mut self) {
        self.state = AppState::Quiz;
        self.focused = 0;
    }

    pub fn back_to_welcome(&mut self) {
        self.state = AppState::Welcome;
    }

    // --- question focus ---

    pub fn focus_next_question(&mut self) {
        let last = self.active_session().controllers().len() - 1;
        self.focused = (self.focused + 1).min(last);
    }

    pub fn focus_previous_question(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    // --- choice cursor / checkboxes / input buffer ---

    pub fn select_next_choice(&mut self) {
        let n = self.focused_controller().question().choices.len();
        if n > 0 {
            let edit = self.focused_edit_mut();
            edit.cursor = (edit.cursor + 1) % n;
        }
    }

    pub fn select_previous_choice(&mut self) {
        let n = self.focused_controller().question().choices.len();
        if n > 0 {
            let edit = self.focused_edit_mut();
            edit.cursor = (edit.cursor + n - 1) % n;
        }
    }

    /// Toggle the highlighted checkbox. Multi-select only, and only while
    /// the question is still open.
    pub fn toggle_checked(&mut self) {
        let controller = self.focused_controller();
        if controller.question().variant != QuestionVariant::MultiSelect
            || controller.state() == QuestionState::Answered
            || !controller.is_gradable()
        {
            return;
        }
        let Some(id) = controller
            .question()
            .choices
            .get(self.focused_edit().cursor)
            .map(|c| c.id.clone())
        else {
            return;
        };
        let edit = self.focused_edit_mut();
        if !edit.checked.remove(&id) {
            edit.checked.insert(id);
        }
    }

    /// True when printable keys belong to the fill-in input buffer.
    pub fn is_editing(&self) -> bool {
        let controller = self.focused_controller();
        controller.question().variant == QuestionVariant::FillInBlank
            && controller.state() == QuestionState::Unanswered
            && controller.is_gradable()
    }

    pub fn input_push(&mut self, c: char) {
        if self.is_editing() {
            let edit = self.focused_edit_mut();
            if edit.input.len() < MAX_INPUT_LENGTH {
                edit.input.push(c);
            }
        }
    }

    pub fn input_pop(&mut self) {
        if self.is_editing() {
            self.focused_edit_mut().input.pop();
        }
    }

    // --- intents ---

    /// Submit the focused question using its current edit state.
    pub fn submit_focused(&mut self) {
        let controller = self.focused_controller();
        let question = controller.question();
        let edit = self.focused_edit();

        let response = match question.variant {
            QuestionVariant::SingleChoice | QuestionVariant::TrueFalse => {
                match question.choices.get(edit.cursor) {
                    Some(choice) => Response::Choice(choice.id.clone()),
                    None => return,
                }
            }
            QuestionVariant::MultiSelect => Response::Choices(
                // Definition order keeps the submission deterministic.
                question
                    .choices
                    .iter()
                    .filter(|c| edit.checked.contains(&c.id))
                    .map(|c| c.id.clone())
                    .collect(),
            ),
            QuestionVariant::FillInBlank => Response::Text(edit.input.clone()),
        };

        let question_id = question.id.clone();
        let events = self.sessions[self.active].submit(&question_id, response);
        self.handle_events(&events);
    }

    /// Toggle the focused question's hint. Gated by the quiz's hint option.
    pub fn toggle_hint_focused(&mut self) {
        if !self.active_session().options().show_hints {
            return;
        }
        let question_id = self.focused_controller().question().id.clone();
        let events = self.sessions[self.active].toggle_hint(&question_id);
        self.handle_events(&events);
    }

    /// Reset the open quiz and its edit state. Gated by the refresh option.
    pub fn reset_active(&mut self) {
        if !self.active_session().options().show_refresh {
            return;
        }
        let events = self.sessions[self.active].reset();
        for edit in &mut self.edits[self.active] {
            *edit = QuestionEdit::default();
        }
        self.focused = 0;
        self.handle_events(&events);
    }

    fn handle_events(&mut self, events: &[QuizEvent]) {
        for event in events {
            debug!("event: {:?}", event);
            if matches!(event, QuizEvent::Graded { .. }) {
                // The advance-to-next signal.
                self.focus_next_question();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, Question, QuizOptions};

    fn choice(id: &str, text: &str, correct: bool) -> Choice {
        Choice {
            id: id.to_string(),
            text: text.to_string(),
            correct,
            feedback: None,
        }
    }

    fn page() -> App {
        let quiz = Quiz {
            id: "capitals".to_string(),
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    variant: QuestionVariant::SingleChoice,
                    text: "Capital of France?".to_string(),
                    choices: vec![choice("0", "Lyon", false), choice("1", "Paris", true)],
                    expected: None,
                    hint: None,
                    media: None,
                },
                Question {
                    id: "q2".to_string(),
                    variant: QuestionVariant::MultiSelect,
                    text: "Select the primes.".to_string(),
                    choices: vec![
                        choice("0", "2", true),
                        choice("1", "3", true),
                        choice("2", "4", false),
                    ],
                    expected: None,
                    hint: None,
                    media: None,
                },
                Question {
                    id: "q3".to_string(),
                    variant: QuestionVariant::FillInBlank,
                    text: "The answer is ___.".to_string(),
                    choices: Vec::new(),
                    expected: Some("42".to_string()),
                    hint: None,
                    media: None,
                },
            ],
            options: QuizOptions::default(),
        };
        let mut app = App::new(vec![quiz]);
        app.open_selected();
        app
    }

    #[test]
    fn test_choice_cursor_wraps() {
        let mut app = page();
        app.select_previous_choice();
        assert_eq!(app.focused_edit().cursor, 1);
        app.select_next_choice();
        assert_eq!(app.focused_edit().cursor, 0);
    }

    #[test]
    fn test_submit_advances_focus() {
        let mut app = page();
        app.select_next_choice(); // highlight Paris
        app.submit_focused();

        assert_eq!(app.focused_index(), 1);
        assert_eq!(app.active_session().score(), 1);
        assert_eq!(app.active_session().answered_count(), 1);
    }

    #[test]
    fn test_multi_select_toggles_and_submits_checked_set() {
        let mut app = page();
        app.focus_next_question();

        app.toggle_checked(); // check 2
        app.select_next_choice();
        app.toggle_checked(); // check 3
        app.toggle_checked(); // uncheck 3
        app.toggle_checked(); // check 3 again
        app.submit_focused();

        let controller = &app.active_session().controllers()[1];
        assert!(controller.verdict().unwrap().correct);
    }

    #[test]
    fn test_input_buffer_feeds_text_submission() {
        let mut app = page();
        app.focused = 2;
        assert!(app.is_editing());

        app.input_push('4');
        app.input_push('3');
        app.input_pop();
        app.input_push('2');
        app.submit_focused();

        assert!(!app.is_editing());
        let controller = &app.active_session().controllers()[2];
        assert!(controller.verdict().unwrap().correct);
    }

    #[test]
    fn test_reset_clears_edit_state() {
        let mut app = page();
        app.select_next_choice();
        app.submit_focused();
        app.focused = 2;
        app.input_push('4');

        app.reset_active();
        assert_eq!(app.focused_index(), 0);
        assert_eq!(app.active_session().answered_count(), 0);
        assert!(app.focused_edit().input.is_empty());
        assert_eq!(app.focused_edit().cursor, 0);
    }

    #[test]
    fn test_hint_respects_quiz_option() {
        let mut app = page();
        app.toggle_hint_focused();
        assert!(app.focused_controller().hint_visible());

        let mut quiz_no_hints = Quiz {
            id: "nh".to_string(),
            questions: vec![Question {
                id: "q1".to_string(),
                variant: QuestionVariant::SingleChoice,
                text: "x".to_string(),
                choices: vec![choice("0", "a", true)],
                expected: None,
                hint: Some("hint".to_string()),
                media: None,
            }],
            options: QuizOptions::default(),
        };
        quiz_no_hints.options.show_hints = false;
        let mut app = App::new(vec![quiz_no_hints]);
        app.open_selected();
        app.toggle_hint_focused();
        assert!(!app.focused_controller().hint_visible());
    }
}
