//! Quiz session state machine.
//!
//! The mode is never stored: it is derived from the current index, so
//! `Finished` holds exactly when every question has been passed.
//!
//! Answering schedules a [`PendingAdvance`] instead of moving on at once,
//! giving the renderer time to flash the selection. The record is checked on
//! every [`QuizSession::tick`] and dropped if the session was restarted or
//! moved on in the meantime.

use std::time::{Duration, Instant};

use log::debug;
use uuid::Uuid;

use crate::models::{Mode, Question, QuestionStore};
use crate::scoring::{self, Tier};

/// A scheduled move to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub fire_at: Instant,
    pub question_index: usize,
    pub attempt: Uuid,
}

/// What a call to [`QuizSession::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Answer recorded; the session moves on at `fire_at`.
    Scheduled { fire_at: Instant },
    /// Answer recorded and the session already moved on.
    Advanced,
    /// Not in progress, or the key is not one of the current options.
    Ignored,
}

pub struct QuizSession {
    store: QuestionStore,
    current_index: usize,
    answer_delay: Duration,
    pending: Option<PendingAdvance>,
    attempt: Uuid,
}

impl QuizSession {
    pub fn new(store: QuestionStore, answer_delay: Duration) -> Self {
        Self {
            store,
            current_index: 0,
            answer_delay,
            pending: None,
            attempt: Uuid::new_v4(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.current_index >= self.store.len() {
            Mode::Finished
        } else {
            Mode::InProgress
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// `None` once the quiz is finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.store.get(self.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn pending(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    pub fn attempt(&self) -> Uuid {
        self.attempt
    }

    pub fn answer_delay(&self) -> Duration {
        self.answer_delay
    }

    pub fn score(&self) -> usize {
        scoring::score(&self.store)
    }

    pub fn tier(&self) -> Tier {
        Tier::for_score(self.score(), self.total_questions())
    }

    /// Record `key` as the answer to the current question.
    ///
    /// Selecting again before the advance fires overwrites the answer but
    /// keeps the first deadline, so each question advances exactly once.
    pub fn select(&mut self, key: char, now: Instant) -> Selection {
        if self.mode() == Mode::Finished {
            return Selection::Ignored;
        }
        let index = self.current_index;
        let is_option = self
            .current_question()
            .is_some_and(|q| q.option_by_key(key).is_some());
        if !is_option || !self.store.record_answer(index, key) {
            return Selection::Ignored;
        }
        debug!("Recorded answer {} for question {}", key, index + 1);

        if self.answer_delay.is_zero() {
            self.pending = None;
            self.advance();
            return Selection::Advanced;
        }

        let scheduled = PendingAdvance {
            fire_at: now + self.answer_delay,
            question_index: index,
            attempt: self.attempt,
        };
        let pending = self.pending.get_or_insert(scheduled);
        Selection::Scheduled {
            fire_at: pending.fire_at,
        }
    }

    /// Fire the pending advance if it is due. Returns true if the index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.fire_at {
            return false;
        }
        self.pending = None;

        let stale = pending.attempt != self.attempt
            || pending.question_index != self.current_index
            || self.mode() == Mode::Finished;
        if stale {
            debug!(
                "Dropping stale advance for question {}",
                pending.question_index + 1
            );
            return false;
        }

        self.advance();
        true
    }

    /// Start over from the first question with every answer cleared.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.pending = None;
        self.attempt = Uuid::new_v4();
        self.store.clear_answers();
        debug!("Quiz restarted ({} questions)", self.store.len());
    }

    fn advance(&mut self) {
        self.current_index += 1;
        if self.mode() == Mode::Finished {
            debug!(
                "Quiz finished with {}/{}",
                self.score(),
                self.total_questions()
            );
        } else {
            debug!("Advanced to question {}", self.current_index + 1);
        }
    }
}
