//! Decorative effects.
//!
//! Nothing here reads or writes quiz state. The app feeds in the frame
//! counter, the canvas extent and the pointer position; the effects hand back
//! shapes for the renderer to paint. Turning effects off never changes how the
//! quiz behaves.
//!
//! Animation coordinates are canvas units with the origin bottom-left and y
//! pointing up, the convention of ratatui's `Canvas`. One unit is one terminal
//! column wide and half a row tall, which keeps circles round.

mod celebration;
mod trail;

use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Line};

pub use celebration::{celebration, encourage, good, praise};
pub use trail::{Particle, ParticleTrail};

/// One shape of an animation frame.
#[derive(Debug, Clone)]
pub enum Sprite {
    Circle(Circle),
    Line(Line),
}

/// Terminal colours have no alpha, so fading darkens towards the background.
pub fn faded(rgb: (u8, u8, u8), alpha: f64) -> Color {
    let k = (alpha / 255.0).clamp(0.0, 1.0);
    let scale = |c: u8| (c as f64 * k).round() as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}
