//! Result-screen animations, one per score tier.
//!
//! Each function is a pure function of the frame counter and canvas extent
//! (plus an RNG where the animation flickers), so any frame can be
//! reproduced in isolation.

use std::f64::consts::SQRT_2;

use rand::Rng;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Line};

use super::{Sprite, faded};
use crate::scoring::Tier;

const RING_SPEED: f64 = 0.6;
const SECOND_RING_SPEED: f64 = 0.45;
const SECOND_RING_OFFSET: f64 = 30.0;
const BUBBLE_COUNT: usize = 5;
const BUBBLE_SPEED: f64 = 0.6;
const BUBBLE_SPACING: f64 = 15.0;
const HEART_SIZE: f64 = 10.0;
const HEART_RGB: (u8, u8, u8) = (255, 50, 50);

/// Frame of the animation for `tier`.
pub fn celebration<R: Rng>(
    tier: Tier,
    frame: u64,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Sprite> {
    match tier {
        Tier::Perfect => praise(frame, width, height, rng),
        Tier::Good => good(frame, width, height),
        Tier::NeedsImprovement => encourage(frame, width, height),
    }
}

/// Two rings expanding from the centre and fading as they grow.
pub fn praise<R: Rng>(frame: u64, width: f64, height: f64, rng: &mut R) -> Vec<Sprite> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let (cx, cy) = (width / 2.0, height / 2.0);
    let t = frame as f64;

    let first = (t * RING_SPEED) % width;
    let random_rgb = (
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    );
    let second = (t * SECOND_RING_SPEED + SECOND_RING_OFFSET) % width;

    vec![
        Sprite::Circle(Circle {
            x: cx,
            y: cy,
            radius: first,
            color: faded(random_rgb, 255.0 * (1.0 - first / width)),
        }),
        Sprite::Circle(Circle {
            x: cx,
            y: cy,
            radius: second,
            color: faded((255, 100, 100), 200.0 * (1.0 - second / width)),
        }),
    ]
}

/// Bubbles rising across the screen with a gentle pulse.
pub fn good(frame: u64, width: f64, height: f64) -> Vec<Sprite> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let t = frame as f64;
    let radius = 3.0 + (t * 0.1).sin() * 1.5;

    (0..BUBBLE_COUNT)
        .map(|i| {
            let x = width * (i + 1) as f64 / (BUBBLE_COUNT + 1) as f64;
            let y = (t * BUBBLE_SPEED + i as f64 * BUBBLE_SPACING) % height;
            Sprite::Circle(Circle {
                x,
                y,
                radius,
                color: faded((150, 200, 255), 255.0 * (1.0 - y / height)),
            })
        })
        .collect()
}

/// A heart beating below the score.
pub fn encourage(frame: u64, width: f64, height: f64) -> Vec<Sprite> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let scale = 1.0 + (frame as f64 * 0.1).sin() * 0.2;
    let side = HEART_SIZE * scale;
    let half_diag = side / SQRT_2;
    let (cx, cy) = (width / 2.0, height * 0.3);
    let color = Color::Rgb(HEART_RGB.0, HEART_RGB.1, HEART_RGB.2);

    let mut sprites = Vec::new();

    // Diamond, filled with horizontal strokes.
    let mut dy = -half_diag;
    while dy <= half_diag {
        let reach = half_diag - dy.abs();
        sprites.push(Sprite::Line(Line {
            x1: cx - reach,
            y1: cy + dy,
            x2: cx + reach,
            y2: cy + dy,
            color,
        }));
        dy += 0.5;
    }

    // Lobes on the two upper edges.
    for lobe_x in [cx - half_diag / 2.0, cx + half_diag / 2.0] {
        sprites.push(Sprite::Circle(Circle {
            x: lobe_x,
            y: cy + half_diag / 2.0,
            radius: side / 2.0,
            color,
        }));
    }

    sprites
}
