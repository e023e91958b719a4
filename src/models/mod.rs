mod question;
mod quiz;

pub use question::{Choice, Media, MediaKind, Question, QuestionVariant};
pub use quiz::{Quiz, QuizOptions};
