mod loader;

pub use loader::{
    FALLBACK_LANGUAGE, LoadError, LocalizedText, load_quizzes_from_json, load_quizzes_from_str,
};
