//! Cross-question state for one quiz: score, progress, completion.
//!
//! A session owns its question controllers and is the only place the
//! aggregate counters are mutated. Every intent method returns the
//! events it emitted, in emission order, for the presentation layer to
//! act on. Sessions on the same page are fully independent.

use log::{debug, warn};

use super::controller::{ConfigError, QuestionController, Response};
use crate::events::QuizEvent;
use crate::models::{Quiz, QuizOptions};

/// Aggregates one quiz's grading events into score / progress / completion.
pub struct QuizSession {
    id: String,
    options: QuizOptions,
    controllers: Vec<QuestionController>,
    score: usize,
    answered: usize,
    complete: bool,
}

impl QuizSession {
    /// Build a session from a quiz definition.
    ///
    /// Configuration errors are reported here, once, and the offending
    /// questions are excluded from grading; the rest of the quiz stays
    /// functional.
    pub fn new(quiz: Quiz) -> Self {
        let Quiz {
            id,
            questions,
            options,
        } = quiz;
        let controllers: Vec<QuestionController> =
            questions.into_iter().map(QuestionController::new).collect();

        for controller in &controllers {
            if let Some(err) = controller.config_error() {
                warn!(
                    "quiz {}: question {} is not gradable: {}",
                    id,
                    controller.question().id,
                    err
                );
            }
        }

        Self {
            id,
            options,
            controllers,
            score: 0,
            answered: 0,
            complete: false,
        }
    }

    /// Submit a response for one question.
    ///
    /// On a successful grade this emits `Graded`, then `ProgressChanged`
    /// (when the quiz shows progress), then `CompletionChanged` when the
    /// quiz just completed. A submit rejected by the answered-guard, an
    /// unknown question id, or a non-gradable question yields no events.
    pub fn submit(&mut self, question_id: &str, response: Response) -> Vec<QuizEvent> {
        let Some(controller) = self
            .controllers
            .iter_mut()
            .find(|c| c.question().id == question_id)
        else {
            return Vec::new();
        };
        let Some(verdict) = controller.submit(response) else {
            return Vec::new();
        };

        debug!(
            "quiz {}: question {} graded {}",
            self.id,
            question_id,
            if verdict.correct { "correct" } else { "incorrect" }
        );

        let mut events = vec![QuizEvent::Graded {
            question_id: question_id.to_string(),
            correct: verdict.correct,
            choices: verdict.choices,
        }];
        events.extend(self.apply_graded(verdict.correct));
        events
    }

    /// Fold one grading outcome into the aggregate counters.
    ///
    /// The controllers' answered-guard is the enforcement point, but the
    /// arithmetic here is guarded too: a stale or duplicate application
    /// can never push `answered` past the total or `score` past
    /// `answered`.
    fn apply_graded(&mut self, correct: bool) -> Vec<QuizEvent> {
        let total = self.total();
        if self.answered >= total {
            return Vec::new();
        }
        self.answered += 1;
        if correct {
            self.score = (self.score + 1).min(self.answered);
        }

        let mut events = Vec::new();
        if self.options.show_progress {
            events.push(QuizEvent::ProgressChanged {
                quiz_id: self.id.clone(),
                progress: self.progress(),
            });
        }
        if !self.complete && self.answered == total {
            self.complete = true;
            events.push(QuizEvent::CompletionChanged {
                quiz_id: self.id.clone(),
                complete: true,
                score: self.score,
                total,
            });
        }
        events
    }

    /// Flip hint visibility for one question.
    pub fn toggle_hint(&mut self, question_id: &str) -> Vec<QuizEvent> {
        let Some(controller) = self
            .controllers
            .iter_mut()
            .find(|c| c.question().id == question_id)
        else {
            return Vec::new();
        };
        let visible = controller.toggle_hint();
        vec![QuizEvent::HintToggled {
            question_id: question_id.to_string(),
            visible,
        }]
    }

    /// Full return to the initial state, whatever was answered so far.
    ///
    /// Callable any number of times. Emits `ProgressChanged(0)` (when the
    /// quiz shows progress), `CompletionChanged(false)` when the quiz had
    /// completed, then `ResetPerformed`.
    pub fn reset(&mut self) -> Vec<QuizEvent> {
        for controller in &mut self.controllers {
            controller.reset();
        }
        self.score = 0;
        self.answered = 0;
        let was_complete = self.complete;
        self.complete = false;

        debug!("quiz {}: reset", self.id);

        let mut events = Vec::new();
        if self.options.show_progress {
            events.push(QuizEvent::ProgressChanged {
                quiz_id: self.id.clone(),
                progress: 0.0,
            });
        }
        if was_complete {
            events.push(QuizEvent::CompletionChanged {
                quiz_id: self.id.clone(),
                complete: false,
                score: 0,
                total: self.total(),
            });
        }
        events.push(QuizEvent::ResetPerformed {
            quiz_id: self.id.clone(),
        });
        events
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> QuizOptions {
        self.options
    }

    /// Number of gradable questions. Misconfigured questions do not
    /// count, so one bad question cannot wedge completion for the rest.
    pub fn total(&self) -> usize {
        self.controllers.iter().filter(|c| c.is_gradable()).count()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answered
    }

    /// Answered fraction in `[0, 1]`. Only rendered for quizzes that show
    /// a progress bar, but always defined.
    pub fn progress(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.answered as f64 / total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn controllers(&self) -> &[QuestionController] {
        &self.controllers
    }

    pub fn controller(&self, question_id: &str) -> Option<&QuestionController> {
        self.controllers
            .iter()
            .find(|c| c.question().id == question_id)
    }

    /// Configuration problems found at setup, by question id.
    pub fn config_errors(&self) -> Vec<(&str, ConfigError)> {
        self.controllers
            .iter()
            .filter_map(|c| c.config_error().map(|e| (c.question().id.as_str(), e)))
            .collect()
    }
}
