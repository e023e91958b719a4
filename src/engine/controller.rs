//! Per-question interaction state.
//!
//! The controller enforces answer-at-most-once per reset cycle: the first
//! successful submit grades and flips the question to `Answered`, every
//! later submit is a silent no-op until a quiz-level reset.

use std::fmt;

use super::grader::{self, Verdict};
use crate::models::{Question, QuestionVariant};

/// Whether a question has been answered in the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered,
}

/// A learner's submitted response, shaped by the question variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Single-choice / true-false: one choice id.
    Choice(String),
    /// Multi-select: the choice ids checked at submit time.
    Choices(Vec<String>),
    /// Fill-in-the-blank: the typed answer.
    Text(String),
}

/// A question whose declared variant is missing the data it needs.
///
/// Detected once at construction. The question still renders, but it is
/// never gradable and does not count toward the quiz total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Fill-in-the-blank with no expected answer configured.
    MissingAnswer,
    /// Choice variant with an empty choice list.
    NoChoices,
    /// Choice variant where no choice is marked correct.
    NoCorrectChoice,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingAnswer => write!(f, "no expected answer configured"),
            ConfigError::NoChoices => write!(f, "no choices configured"),
            ConfigError::NoCorrectChoice => write!(f, "no choice is marked correct"),
        }
    }
}

/// Owns one question's transient state and drives the grader.
pub struct QuestionController {
    question: Question,
    state: QuestionState,
    selection: Option<Response>,
    verdict: Option<Verdict>,
    hint_visible: bool,
    config_error: Option<ConfigError>,
}

impl QuestionController {
    pub fn new(question: Question) -> Self {
        let config_error = validate(&question);
        Self {
            question,
            state: QuestionState::Unanswered,
            selection: None,
            verdict: None,
            hint_visible: false,
            config_error,
        }
    }

    /// Submit a response.
    ///
    /// Returns the verdict on the first submit of a cycle. Returns `None`
    /// with no state change when the question is already answered, is not
    /// gradable, or the response shape does not match the variant.
    pub fn submit(&mut self, response: Response) -> Option<Verdict> {
        if self.state == QuestionState::Answered || !self.is_gradable() {
            return None;
        }

        let verdict = match (self.question.variant, &response) {
            (QuestionVariant::SingleChoice | QuestionVariant::TrueFalse, Response::Choice(id)) => {
                grader::grade_single(&self.question.choices, id)
            }
            (QuestionVariant::MultiSelect, Response::Choices(ids)) => {
                grader::grade_multi(&self.question.choices, ids)
            }
            (QuestionVariant::FillInBlank, Response::Text(text)) => {
                grader::grade_text(self.question.expected.as_deref()?, text)
            }
            _ => return None,
        };

        self.selection = Some(response);
        self.verdict = Some(verdict.clone());
        self.state = QuestionState::Answered;
        Some(verdict)
    }

    /// Flip hint visibility and return the new value.
    ///
    /// Legal in any state, any number of times; never touches grading
    /// state.
    pub fn toggle_hint(&mut self) -> bool {
        self.hint_visible = !self.hint_visible;
        self.hint_visible
    }

    /// Back to the initial state: unanswered, no selection, hint hidden.
    pub fn reset(&mut self) {
        self.state = QuestionState::Unanswered;
        self.selection = None;
        self.verdict = None;
        self.hint_visible = false;
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn state(&self) -> QuestionState {
        self.state
    }

    pub fn selection(&self) -> Option<&Response> {
        self.selection.as_ref()
    }

    /// The stored verdict, present exactly while answered.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn config_error(&self) -> Option<ConfigError> {
        self.config_error
    }

    pub fn is_gradable(&self) -> bool {
        self.config_error.is_none()
    }
}

fn validate(question: &Question) -> Option<ConfigError> {
    match question.variant {
        QuestionVariant::FillInBlank => match &question.expected {
            Some(answer) if !answer.trim().is_empty() => None,
            _ => Some(ConfigError::MissingAnswer),
        },
        _ => {
            if question.choices.is_empty() {
                Some(ConfigError::NoChoices)
            } else if question.correct_choice_count() == 0 {
                Some(ConfigError::NoCorrectChoice)
            } else {
                None
            }
        }
    }
}
