use rand::Rng;
use ratatui::style::Color;

use super::faded;

const TRAIL_RGB: (u8, u8, u8) = (255, 255, 150);
const FADE_PER_FRAME: f64 = 5.0;
const MAX_SPEED: f64 = 0.25;

/// A spark left behind by the pointer. Positions are in terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
    pub size: f64,
}

impl Particle {
    pub fn spawn<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            alpha: 255.0,
            size: rng.gen_range(3.0..8.0),
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.alpha -= FADE_PER_FRAME;
    }

    pub fn is_finished(&self) -> bool {
        self.alpha < 0.0
    }

    pub fn symbol(&self) -> &'static str {
        if self.size < 5.0 { "·" } else { "•" }
    }

    pub fn color(&self) -> Color {
        faded(TRAIL_RGB, self.alpha)
    }
}

/// Particles following the pointer.
#[derive(Debug, Default)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
}

impl ParticleTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one particle at the pointer, then move and fade every particle.
    pub fn step<R: Rng>(&mut self, pointer: Option<(u16, u16)>, rng: &mut R) {
        if let Some((x, y)) = pointer {
            self.particles.push(Particle::spawn(x as f64, y as f64, rng));
        }
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_finished());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
