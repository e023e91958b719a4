//! Events the quiz core emits toward the presentation layer.
//!
//! All events are serializable as tagged JSON so that any host adapter
//! (the bundled terminal UI, or an embedding application) can consume
//! them off-process if it wants to.

use serde::{Deserialize, Serialize};

/// Grading result for one selected choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceVerdict {
    pub choice_id: String,
    pub correct: bool,
}

/// Events emitted by a quiz session in response to user intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuizEvent {
    /// A question was graded. Emitted exactly once per successful submit;
    /// a submit rejected by the answered-guard emits nothing.
    Graded {
        question_id: String,
        correct: bool,
        /// One entry per selected choice; empty for fill-in-the-blank.
        choices: Vec<ChoiceVerdict>,
    },

    /// Hint visibility flipped for a question.
    HintToggled { question_id: String, visible: bool },

    /// The answered fraction changed. Only emitted for quizzes that show
    /// a progress bar.
    ProgressChanged { quiz_id: String, progress: f64 },

    /// The quiz crossed into (or, on reset, out of) the completed state.
    CompletionChanged {
        quiz_id: String,
        complete: bool,
        score: usize,
        total: usize,
    },

    /// A reset finished; every question is back to its initial state.
    ResetPerformed { quiz_id: String },
}
