use serde::{Deserialize, Serialize};

/// The four answer shapes a question can take.
///
/// The wire names match the `type` tags used in the quiz file. True-false
/// is graded exactly like single-choice; it only differs in authoring
/// (exactly two options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionVariant {
    #[serde(rename = "multiple-choice")]
    SingleChoice,
    #[serde(rename = "true-false")]
    TrueFalse,
    #[serde(rename = "fill-in-the-blank")]
    FillInBlank,
    #[serde(rename = "multi-choice")]
    MultiSelect,
}

impl QuestionVariant {
    /// Whether this variant carries a choice list.
    pub fn has_choices(self) -> bool {
        !matches!(self, QuestionVariant::FillInBlank)
    }
}

/// One selectable choice of a choice-variant question.
#[derive(Debug, Clone)]
pub struct Choice {
    /// Unique within the question (the zero-based position as a string).
    pub id: String,
    pub text: String,
    pub correct: bool,
    /// Shown when this choice is the basis of feedback, whatever the verdict.
    pub feedback: Option<String>,
}

/// Kind of media attached to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

/// Media attached to a question. Presentation-only, never graded.
#[derive(Debug, Clone)]
pub struct Media {
    pub kind: MediaKind,
    pub src: String,
    pub alt: Option<String>,
}

/// A question as constructed from the quiz file, with all text already
/// resolved to one language.
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique within the quiz.
    pub id: String,
    pub variant: QuestionVariant,
    pub text: String,
    /// Present for choice variants, empty for fill-in-the-blank.
    pub choices: Vec<Choice>,
    /// Expected answer for fill-in-the-blank.
    pub expected: Option<String>,
    /// Static hint text, shown on demand. Never affects grading.
    pub hint: Option<String>,
    pub media: Option<Media>,
}

impl Question {
    /// Look up a choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    pub fn correct_choice_count(&self) -> usize {
        self.choices.iter().filter(|c| c.correct).count()
    }
}
