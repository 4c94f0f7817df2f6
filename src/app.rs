use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::QuizConfig;
use crate::effects::ParticleTrail;
use crate::input::{self, Hover};
use crate::models::QuestionStore;
use crate::session::QuizSession;

pub struct App {
    session: QuizSession,
    config: QuizConfig,
    viewport: Rect,
    pointer: Option<(u16, u16)>,
    frame: u64,
    trail: ParticleTrail,
}

impl App {
    pub fn new(store: QuestionStore, config: QuizConfig) -> Self {
        Self {
            session: QuizSession::new(store, config.answer_delay),
            config,
            viewport: Rect::default(),
            pointer: None,
            frame: 0,
            trail: ParticleTrail::new(),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn effects_enabled(&self) -> bool {
        self.config.effects
    }

    /// Screen area of the last drawn frame; clicks are resolved against it.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    pub fn set_pointer(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
    }

    pub fn hover(&self) -> Option<Hover> {
        let (x, y) = self.pointer?;
        input::hover_target(&self.session, self.viewport, x, y)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn trail(&self) -> &ParticleTrail {
        &self.trail
    }

    /// Advance one frame: fire a due answer advance and step the effects.
    pub fn tick(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        self.session.tick(now);
        if self.config.effects {
            self.trail.step(self.pointer, &mut rand::thread_rng());
        }
    }
}
