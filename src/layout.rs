//! Screen geometry shared by rendering and hit-testing.
//!
//! Every clickable region is computed here from the viewport alone, so the
//! boxes the user sees are exactly the boxes the input handler tests against.
//! Containment is half-open: a rect covers `x..x + width` and `y..y + height`.

use ratatui::layout::{Margin, Position, Rect};

pub const OPTION_HEIGHT: u16 = 3;
pub const OPTION_GAP: u16 = 1;
const MAX_OPTION_WIDTH: u16 = 60;
const OPTIONS_TOP: u16 = 6;
const RESTART_WIDTH: u16 = 20;
const RESTART_HEIGHT: u16 = 3;

/// Regions of the question screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizLayout {
    pub progress: Rect,
    pub prompt: Rect,
    pub options: Vec<Rect>,
    pub controls: Rect,
}

impl QuizLayout {
    pub fn new(area: Rect, option_count: usize) -> Self {
        let inner = area.inner(Margin::new(2, 1));
        let width = inner.width.min(MAX_OPTION_WIDTH);
        let left = inner.x + (inner.width - width) / 2;
        let top = inner.y.saturating_add(OPTIONS_TOP);

        let options = (0..option_count)
            .map(|i| {
                let offset = (i as u16).saturating_mul(OPTION_HEIGHT + OPTION_GAP);
                Rect::new(left, top.saturating_add(offset), width, OPTION_HEIGHT)
                    .intersection(inner)
            })
            .collect();

        Self {
            progress: row(inner, 0),
            prompt: Rect::new(inner.x, inner.y.saturating_add(2), inner.width, 3)
                .intersection(inner),
            options,
            controls: last_row(area),
        }
    }

    /// Index of the first option box containing the point.
    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        let point = Position::new(x, y);
        self.options.iter().position(|rect| rect.contains(point))
    }
}

/// Regions of the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLayout {
    pub title: Rect,
    pub message: Rect,
    pub score: Rect,
    pub caption: Rect,
    pub restart: Rect,
    pub controls: Rect,
}

impl ResultLayout {
    pub fn new(area: Rect) -> Self {
        let middle = area.height / 2;
        let restart_center_y = area.y + area.height * 3 / 4;
        let restart_center_x = area.x + area.width / 2;

        let restart = Rect::new(
            restart_center_x.saturating_sub(RESTART_WIDTH / 2),
            restart_center_y.saturating_sub(RESTART_HEIGHT / 2),
            RESTART_WIDTH,
            RESTART_HEIGHT,
        )
        .intersection(area);

        Self {
            title: row(area, area.height / 6),
            message: row(area, area.height / 6 + 2),
            score: row(area, middle),
            caption: row(area, middle + 2),
            restart,
            controls: last_row(area),
        }
    }

    pub fn restart_contains(&self, x: u16, y: u16) -> bool {
        self.restart.contains(Position::new(x, y))
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(offset), area.width, 1).intersection(area)
}

fn last_row(area: Rect) -> Rect {
    row(area, area.height.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn options_are_stacked_and_centered() {
        let layout = QuizLayout::new(screen(), 3);
        assert_eq!(layout.options.len(), 3);

        let first = layout.options[0];
        assert_eq!(first.width, MAX_OPTION_WIDTH);
        assert_eq!(first.x, 2 + (96 - MAX_OPTION_WIDTH) / 2);
        assert_eq!(first.y, 1 + OPTIONS_TOP);
        assert_eq!(layout.options[1].y, first.y + OPTION_HEIGHT + OPTION_GAP);
    }

    #[test]
    fn hit_test_uses_half_open_bounds() {
        let layout = QuizLayout::new(screen(), 3);
        let first = layout.options[0];

        assert_eq!(layout.option_at(first.x, first.y), Some(0));
        assert_eq!(layout.option_at(first.right() - 1, first.bottom() - 1), Some(0));
        assert_eq!(layout.option_at(first.right(), first.y), None);
        // The row just below the first box is the gap.
        assert_eq!(layout.option_at(first.x, first.bottom()), None);
        assert_eq!(layout.option_at(first.x, layout.options[1].y), Some(1));
    }

    #[test]
    fn click_outside_options_misses() {
        let layout = QuizLayout::new(screen(), 3);
        assert_eq!(layout.option_at(0, 0), None);
        assert_eq!(layout.option_at(99, 39), None);
    }

    #[test]
    fn options_past_the_bottom_are_clipped() {
        let small = Rect::new(0, 0, 40, 12);
        let layout = QuizLayout::new(small, 3);
        let last = layout.options[2];
        assert!(last.is_empty());
        assert_eq!(layout.option_at(last.x, last.y), None);
    }

    #[test]
    fn restart_button_sits_at_three_quarters() {
        let layout = ResultLayout::new(screen());
        let restart = layout.restart;
        assert_eq!(restart.width, RESTART_WIDTH);
        assert_eq!(restart.y, 30 - RESTART_HEIGHT / 2);
        assert_eq!(restart.x, 50 - RESTART_WIDTH / 2);

        assert!(layout.restart_contains(restart.x, restart.y));
        assert!(!layout.restart_contains(restart.right(), restart.y));
        assert!(!layout.restart_contains(restart.x, restart.bottom()));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let tiny = Rect::new(0, 0, 3, 1);
        let quiz = QuizLayout::new(tiny, 3);
        assert!(quiz.options.iter().all(|rect| rect.is_empty()));
        let result = ResultLayout::new(tiny);
        assert!(result.restart.width <= tiny.width);
        assert!(result.restart.height <= tiny.height);
    }
}
