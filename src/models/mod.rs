mod question;
mod store;

pub use question::{Choice, Question};
pub use store::QuestionStore;

/// Which screen the quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Answering the question at the current index.
    InProgress,
    /// Every question has been answered; the result screen is showing.
    Finished,
}
