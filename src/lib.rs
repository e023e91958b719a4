//! # doc-quiz
//!
//! An interactive quiz engine for documentation pages, with a bundled
//! terminal front end.
//!
//! The core (grading, per-question state, per-quiz score/progress/
//! completion) is pure and synchronous; it is driven through intents and
//! observed through queries and [`QuizEvent`]s, so any presentation
//! layer can sit on top of it. The bundled one renders a page of quizzes
//! in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doc_quiz::{PageOptions, QuizError, QuizPage};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load every quiz on the page from a JSON file
//!     let page = QuizPage::from_json("quizzes.json", PageOptions::default())?;
//!
//!     // Run the page in the terminal
//!     page.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod engine;
mod events;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, AppState, QuestionEdit};
pub use data::{
    FALLBACK_LANGUAGE, LoadError, LocalizedText, load_quizzes_from_json, load_quizzes_from_str,
};
pub use engine::{
    ConfigError, QuestionController, QuestionState, QuizSession, Response, Verdict, grade_multi,
    grade_single, grade_text,
};
pub use events::{ChoiceVerdict, QuizEvent};
pub use models::{Choice, Media, MediaKind, Question, QuestionVariant, Quiz, QuizOptions};

/// Error type for quiz page operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the quiz file.
    Load(LoadError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quizzes: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Options applied to every quiz on the page at construction time.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Language the localized quiz text is resolved in.
    pub language: String,
    pub quiz: QuizOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.to_string(),
            quiz: QuizOptions::default(),
        }
    }
}

/// A page of quizzes that can be run in the terminal.
pub struct QuizPage {
    app: App,
}

impl QuizPage {
    /// Create a page from already-constructed quiz definitions.
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            app: App::new(quizzes),
        }
    }

    /// Load a page of quizzes from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use doc_quiz::{PageOptions, QuizPage};
    ///
    /// let page = QuizPage::from_json("quizzes.json", PageOptions::default())
    ///     .expect("Failed to load quizzes");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, options: PageOptions) -> Result<Self, QuizError> {
        let quizzes = load_quizzes_from_json(path, &options.language, options.quiz)?;
        Ok(Self::new(quizzes))
    }

    /// Run the page in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::PageTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the page should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_quiz();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_quiz();
            false
        }
        KeyCode::Enter => {
            app.open_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    // While a fill-in answer is being typed, printable keys belong to the
    // input buffer.
    if app.is_editing() {
        match key {
            KeyCode::Char(c) => app.input_push(c),
            KeyCode::Backspace => app.input_pop(),
            KeyCode::Enter => app.submit_focused(),
            KeyCode::Tab => app.focus_next_question(),
            KeyCode::BackTab => app.focus_previous_question(),
            KeyCode::Esc => app.back_to_welcome(),
            _ => {}
        }
        return false;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_choice();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_choice();
            false
        }
        KeyCode::Tab | KeyCode::Char('n') => {
            app.focus_next_question();
            false
        }
        KeyCode::BackTab | KeyCode::Char('p') => {
            app.focus_previous_question();
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_checked();
            false
        }
        KeyCode::Enter => {
            app.submit_focused();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.toggle_hint_focused();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_active();
            false
        }
        KeyCode::Esc => {
            app.back_to_welcome();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
