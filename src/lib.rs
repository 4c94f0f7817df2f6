//! # click-quiz
//!
//! A mouse-driven multiple-choice quiz for the terminal.
//!
//! Questions come from a CSV file (`question,optA,optB,optC,answer`). Click an
//! option to answer; after a short pause the next question appears. When all
//! questions are answered the result screen shows the score with an animation
//! for the score tier, and a restart button.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use click_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_path("questions.csv")?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod effects;
pub mod input;
pub mod layout;
mod models;
pub mod scoring;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Instant;

use crossterm::event;
use thiserror::Error;

pub use app::App;
pub use config::QuizConfig;
pub use data::{LoadError, load_questions, parse_csv, parse_json};
pub use input::{Click, Hover, handle_click};
pub use models::{Choice, Mode, Question, QuestionStore};
pub use scoring::{Tier, score};
pub use session::{PendingAdvance, QuizSession, Selection};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(store: QuestionStore) -> Self {
        Self::with_config(store, QuizConfig::default())
    }

    pub fn with_config(store: QuestionStore, config: QuizConfig) -> Self {
        Self {
            app: App::new(store, config),
        }
    }

    /// Load a quiz from a CSV or JSON question file.
    ///
    /// A missing file gives an empty quiz rather than an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Self::from_path_with_config(path, QuizConfig::default())
    }

    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: QuizConfig,
    ) -> Result<Self, QuizError> {
        let store = load_questions(path)?;
        Ok(Self::with_config(store, config))
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the user quits, then restores it.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    let tick_rate = app.config().tick_rate;
    let mut last_tick = Instant::now();

    loop {
        let completed = terminal.draw(|frame| ui::render(frame, app))?;
        app.set_viewport(completed.area);

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? && input::handle_event(app, event::read()?, Instant::now()) {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.tick(last_tick);
        }
    }

    Ok(())
}
