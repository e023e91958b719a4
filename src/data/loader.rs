//! Quiz file loading.
//!
//! The quiz file is one JSON document holding every quiz on a page, with
//! all human-readable text stored as language → string maps. One language
//! is chosen here, at load time; everything downstream sees plain
//! strings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Choice, Media, MediaKind, Question, QuestionVariant, Quiz, QuizOptions};

/// Language every localized text falls back to.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Language → text map, resolved once at load time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedText(HashMap<String, String>);

impl LocalizedText {
    /// The text for `language`, falling back to [`FALLBACK_LANGUAGE`].
    pub fn resolve(&self, language: &str) -> Option<&str> {
        self.0
            .get(language)
            .or_else(|| self.0.get(FALLBACK_LANGUAGE))
            .map(String::as_str)
    }
}

/// Error loading or resolving the quiz file.
#[derive(Debug)]
pub enum LoadError {
    /// The quiz file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The quiz file is not valid JSON.
    Parse(serde_json::Error),
    /// The file holds no quizzes at all.
    NoQuizzes,
    /// A quiz has an empty question list.
    EmptyQuiz { quiz: String },
    /// A required text has no entry for the requested language or "en".
    MissingText { quiz: String, field: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse(e) => write!(f, "invalid quiz JSON: {}", e),
            LoadError::NoQuizzes => write!(f, "quiz file contains no quizzes"),
            LoadError::EmptyQuiz { quiz } => {
                write!(f, "quiz {} must contain at least one question", quiz)
            }
            LoadError::MissingText { quiz, field } => {
                write!(f, "quiz {}: {} has no usable translation", quiz, field)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct QuizFile {
    // BTreeMap keeps page order deterministic.
    quizzes: BTreeMap<String, RawQuiz>,
}

#[derive(Deserialize)]
struct RawQuiz {
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct RawQuestion {
    // Absent type tag means multiple-choice.
    #[serde(rename = "type", default = "default_variant")]
    variant: QuestionVariant,
    question: LocalizedText,
    #[serde(default)]
    options: Vec<RawChoice>,
    #[serde(default)]
    answer: Option<LocalizedText>,
    #[serde(default)]
    indice: Option<LocalizedText>,
    #[serde(default)]
    media: Option<RawMedia>,
}

fn default_variant() -> QuestionVariant {
    QuestionVariant::SingleChoice
}

#[derive(Deserialize)]
struct RawChoice {
    text: LocalizedText,
    correct: bool,
    #[serde(default)]
    indice: Option<LocalizedText>,
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(rename = "type")]
    kind: MediaKind,
    src: String,
    #[serde(default)]
    alt: Option<LocalizedText>,
}

/// Load every quiz from a JSON file, resolving text in `language`.
pub fn load_quizzes_from_json<P: AsRef<Path>>(
    path: P,
    language: &str,
    options: QuizOptions,
) -> Result<Vec<Quiz>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_quizzes_from_str(&contents, language, options)
}

/// Load every quiz from a JSON string, resolving text in `language`.
pub fn load_quizzes_from_str(
    json: &str,
    language: &str,
    options: QuizOptions,
) -> Result<Vec<Quiz>, LoadError> {
    let file: QuizFile = serde_json::from_str(json).map_err(LoadError::Parse)?;
    if file.quizzes.is_empty() {
        return Err(LoadError::NoQuizzes);
    }

    file.quizzes
        .into_iter()
        .map(|(id, raw)| build_quiz(id, raw, language, options))
        .collect()
}

fn build_quiz(
    id: String,
    raw: RawQuiz,
    language: &str,
    options: QuizOptions,
) -> Result<Quiz, LoadError> {
    if raw.questions.is_empty() {
        return Err(LoadError::EmptyQuiz { quiz: id });
    }

    let questions = raw
        .questions
        .into_iter()
        .map(|q| build_question(&id, q, language))
        .collect::<Result<Vec<Question>, LoadError>>()?;

    debug!("loaded quiz {} with {} questions", id, questions.len());
    Ok(Quiz {
        id,
        questions,
        options,
    })
}

fn build_question(
    quiz_id: &str,
    raw: RawQuestion,
    language: &str,
) -> Result<Question, LoadError> {
    let text = raw
        .question
        .resolve(language)
        .ok_or(LoadError::MissingText {
            quiz: quiz_id.to_string(),
            field: "question text",
        })?
        .to_string();

    let choices = raw
        .options
        .into_iter()
        .enumerate()
        .map(|(i, opt)| {
            Ok(Choice {
                id: i.to_string(),
                text: opt
                    .text
                    .resolve(language)
                    .ok_or(LoadError::MissingText {
                        quiz: quiz_id.to_string(),
                        field: "option text",
                    })?
                    .to_string(),
                correct: opt.correct,
                feedback: opt
                    .indice
                    .as_ref()
                    .and_then(|t| t.resolve(language))
                    .map(str::to_string),
            })
        })
        .collect::<Result<Vec<Choice>, LoadError>>()?;

    Ok(Question {
        // The document does not carry question ids; mint them here.
        id: Uuid::new_v4().simple().to_string(),
        variant: raw.variant,
        text,
        choices,
        expected: raw
            .answer
            .as_ref()
            .and_then(|t| t.resolve(language))
            .map(str::to_string),
        hint: raw
            .indice
            .as_ref()
            .and_then(|t| t.resolve(language))
            .map(str::to_string),
        media: raw.media.map(|m| Media {
            kind: m.kind,
            src: m.src,
            alt: m.alt.as_ref().and_then(|t| t.resolve(language)).map(str::to_string),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "quizzes": {
            "capitals": {
                "questions": [
                    {
                        "question": {"en": "What is the capital of France?", "fr": "Quelle est la capitale de la France ?"},
                        "options": [
                            {"text": {"en": "Berlin"}, "correct": false},
                            {"text": {"en": "Paris"}, "correct": true, "indice": {"en": "The city of light."}}
                        ]
                    },
                    {
                        "type": "fill-in-the-blank",
                        "question": {"en": "The answer to everything is ___."},
                        "answer": {"en": "42"},
                        "indice": {"en": "Ask Deep Thought."}
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_load_resolves_text_and_defaults() {
        let quizzes =
            load_quizzes_from_str(SAMPLE, "en", QuizOptions::default()).unwrap();
        assert_eq!(quizzes.len(), 1);

        let quiz = &quizzes[0];
        assert_eq!(quiz.id, "capitals");
        assert_eq!(quiz.questions.len(), 2);

        let q1 = &quiz.questions[0];
        // Absent type tag defaults to multiple-choice.
        assert_eq!(q1.variant, QuestionVariant::SingleChoice);
        assert_eq!(q1.choices.len(), 2);
        assert_eq!(q1.choices[0].id, "0");
        assert_eq!(q1.choices[1].id, "1");
        assert!(q1.choices[1].correct);
        assert_eq!(
            q1.choices[1].feedback.as_deref(),
            Some("The city of light.")
        );

        let q2 = &quiz.questions[1];
        assert_eq!(q2.variant, QuestionVariant::FillInBlank);
        assert_eq!(q2.expected.as_deref(), Some("42"));
        assert_eq!(q2.hint.as_deref(), Some("Ask Deep Thought."));

        // Minted question ids are unique within the quiz.
        assert_ne!(q1.id, q2.id);
    }

    #[test]
    fn test_language_fallback() {
        let quizzes =
            load_quizzes_from_str(SAMPLE, "fr", QuizOptions::default()).unwrap();
        let quiz = &quizzes[0];
        // The question text has a French entry...
        assert_eq!(
            quiz.questions[0].text,
            "Quelle est la capitale de la France ?"
        );
        // ...the options only have English and fall back.
        assert_eq!(quiz.questions[0].choices[1].text, "Paris");
    }

    #[test]
    fn test_missing_translation_is_an_error() {
        let json = r#"{
            "quizzes": {
                "q": {
                    "questions": [{"question": {"de": "Nur Deutsch"}, "options": [{"text": {"en": "x"}, "correct": true}]}]
                }
            }
        }"#;
        let err = load_quizzes_from_str(json, "en", QuizOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingText { .. }));
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        let json = r#"{"quizzes": {"empty": {"questions": []}}}"#;
        let err = load_quizzes_from_str(json, "en", QuizOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyQuiz { .. }));
    }

    #[test]
    fn test_no_quizzes_is_rejected() {
        let err = load_quizzes_from_str(r#"{"quizzes": {}}"#, "en", QuizOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::NoQuizzes));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err =
            load_quizzes_from_str("not json", "en", QuizOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_media_is_parsed() {
        let json = r#"{
            "quizzes": {
                "m": {
                    "questions": [{
                        "question": {"en": "What is shown below?"},
                        "media": {"type": "image", "src": "dog.png", "alt": {"en": "A dog"}},
                        "options": [{"text": {"en": "A dog"}, "correct": true}]
                    }]
                }
            }
        }"#;
        let quizzes = load_quizzes_from_str(json, "en", QuizOptions::default()).unwrap();
        let media = quizzes[0].questions[0].media.as_ref().unwrap();
        assert_eq!(media.kind, MediaKind::Image);
        assert_eq!(media.src, "dog.png");
        assert_eq!(media.alt.as_deref(), Some("A dog"));
    }
}
