use std::time::Duration;

pub const DEFAULT_ANSWER_DELAY_MS: u64 = 500;
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

/// Runtime knobs for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// Pause between choosing an answer and showing the next question.
    /// Zero moves on immediately.
    pub answer_delay: Duration,
    /// Frame interval of the draw loop.
    pub tick_rate: Duration,
    /// Cursor trail and result animations.
    pub effects: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            answer_delay: Duration::from_millis(DEFAULT_ANSWER_DELAY_MS),
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            effects: true,
        }
    }
}
