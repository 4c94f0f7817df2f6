use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use click_quiz::config::{DEFAULT_ANSWER_DELAY_MS, DEFAULT_TICK_RATE_MS};
use click_quiz::{Quiz, QuizConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV (or JSON) file to load the questions from
    #[arg(short, long, default_value = "questions.csv")]
    questions: PathBuf,

    /// Milliseconds to wait after an answer before the next question
    #[arg(long, default_value_t = DEFAULT_ANSWER_DELAY_MS)]
    answer_delay_ms: u64,

    /// Milliseconds between frames
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_RATE_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    tick_rate_ms: u64,

    /// Turn off the cursor trail and result animations
    #[arg(long)]
    no_effects: bool,
}

impl Args {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            answer_delay: Duration::from_millis(self.answer_delay_ms),
            tick_rate: Duration::from_millis(self.tick_rate_ms),
            effects: !self.no_effects,
        }
    }
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = match Quiz::from_path_with_config(&args.questions, args.config()) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Starting quiz with {} questions",
        quiz.app().session().total_questions()
    );

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
