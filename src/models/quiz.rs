use super::Question;

/// Per-quiz display options, fixed at construction.
///
/// These gate rendering and controls only; grading arithmetic never
/// consults them (except that progress events are suppressed when the
/// progress bar is hidden).
#[derive(Debug, Clone, Copy)]
pub struct QuizOptions {
    pub show_progress: bool,
    pub show_score: bool,
    pub show_hints: bool,
    pub show_refresh: bool,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_score: true,
            show_hints: true,
            show_refresh: true,
        }
    }
}

/// A quiz definition: an ordered question list plus display options.
///
/// The question order is the presentation order; after a submit, focus
/// advances to the next question in this order.
#[derive(Debug, Clone)]
pub struct Quiz {
    /// Unique within a page (the quiz's key in the quiz file).
    pub id: String,
    pub questions: Vec<Question>,
    pub options: QuizOptions,
}
