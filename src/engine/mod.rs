//! The quiz core: pure grading, per-question state, per-quiz aggregation.
//!
//! Everything in here is synchronous and free of I/O; the presentation
//! layer drives it through intents and re-renders from its queries and
//! emitted [`crate::events::QuizEvent`]s.

mod controller;
mod grader;
mod session;

pub use controller::{ConfigError, QuestionController, QuestionState, Response};
pub use grader::{Verdict, grade_multi, grade_single, grade_text};
pub use session::QuizSession;
