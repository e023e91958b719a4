use std::path::PathBuf;

use clap::Parser;
use doc_quiz::{PageOptions, QuizOptions, QuizPage};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quizzes from
    #[arg(short, long, default_value = "quizzes.json")]
    quizzes: PathBuf,

    /// Language the localized quiz text is resolved in
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Hide the per-quiz progress bar
    #[arg(long)]
    no_progress: bool,

    /// Hide the score shown on completion
    #[arg(long)]
    no_score: bool,

    /// Disable hints
    #[arg(long)]
    no_hints: bool,

    /// Disable the reset control
    #[arg(long)]
    no_refresh: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let options = PageOptions {
        language: args.language,
        quiz: QuizOptions {
            show_progress: !args.no_progress,
            show_score: !args.no_score,
            show_hints: !args.no_hints,
            show_refresh: !args.no_refresh,
        },
    };

    let page = match QuizPage::from_json(&args.quizzes, options) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = page.run() {
        eprintln!("Error running quiz page: {}", e);
        std::process::exit(1);
    }
}
