//! Pointer and keyboard routing.
//!
//! Clicks are resolved against the same [`layout`](crate::layout) the
//! renderer draws with. What a click means depends only on the session mode.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::App;
use crate::layout::{QuizLayout, ResultLayout};
use crate::models::Mode;
use crate::session::{QuizSession, Selection};

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Selected(char),
    Restarted,
    Missed,
}

/// Region under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Option(usize),
    Restart,
}

/// Resolve a press at cell `(x, y)` of a screen covering `viewport`.
pub fn handle_click(
    session: &mut QuizSession,
    viewport: Rect,
    x: u16,
    y: u16,
    now: Instant,
) -> Click {
    match session.mode() {
        Mode::InProgress => {
            let Some(question) = session.current_question() else {
                return Click::Missed;
            };
            let layout = QuizLayout::new(viewport, question.options.len());
            let Some(index) = layout.option_at(x, y) else {
                return Click::Missed;
            };
            let key = question.options[index].key;
            match session.select(key, now) {
                Selection::Ignored => Click::Missed,
                _ => Click::Selected(key),
            }
        }
        Mode::Finished => {
            if ResultLayout::new(viewport).restart_contains(x, y) {
                session.restart();
                Click::Restarted
            } else {
                Click::Missed
            }
        }
    }
}

pub fn hover_target(session: &QuizSession, viewport: Rect, x: u16, y: u16) -> Option<Hover> {
    match session.current_question() {
        Some(question) => QuizLayout::new(viewport, question.options.len())
            .option_at(x, y)
            .map(Hover::Option),
        None => ResultLayout::new(viewport)
            .restart_contains(x, y)
            .then_some(Hover::Restart),
    }
}

/// Returns true if the app should exit.
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, now),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse, now);
            false
        }
        _ => false,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.set_pointer(mouse.column, mouse.row);
            let viewport = app.viewport();
            handle_click(app.session_mut(), viewport, mouse.column, mouse.row, now);
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.set_pointer(mouse.column, mouse.row);
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }

    let session = app.session_mut();
    match session.mode() {
        Mode::InProgress => {
            if let KeyCode::Char(c) = key.code {
                session.select(c.to_ascii_uppercase(), now);
            }
        }
        Mode::Finished => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')) {
                session.restart();
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::{Choice, Question};

    const DELAY: Duration = Duration::from_millis(500);

    fn viewport() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    fn session(correct: &[&str]) -> QuizSession {
        let questions: Vec<Question> = correct
            .iter()
            .map(|key| {
                Question::new(
                    "pick one",
                    vec![
                        Choice::new('A', "first"),
                        Choice::new('B', "second"),
                        Choice::new('C', "third"),
                    ],
                    *key,
                )
            })
            .collect();
        QuizSession::new(questions.into(), DELAY)
    }

    fn option_point(index: usize) -> (u16, u16) {
        let rect = QuizLayout::new(viewport(), 3).options[index];
        (rect.x + 1, rect.y + 1)
    }

    fn restart_point() -> (u16, u16) {
        let rect = ResultLayout::new(viewport()).restart;
        (rect.x, rect.y)
    }

    fn click_option(session: &mut QuizSession, index: usize, now: Instant) -> Click {
        let (x, y) = option_point(index);
        handle_click(session, viewport(), x, y, now)
    }

    #[test]
    fn click_on_option_records_its_key() {
        let mut s = session(&["B"]);
        let now = Instant::now();
        assert_eq!(click_option(&mut s, 1, now), Click::Selected('B'));
        assert_eq!(s.current_question().unwrap().user_answer(), Some('B'));
        assert_eq!(s.pending().unwrap().fire_at, now + DELAY);
    }

    #[test]
    fn click_outside_options_changes_nothing() {
        let mut s = session(&["A", "B"]);
        let now = Instant::now();
        assert_eq!(handle_click(&mut s, viewport(), 0, 0, now), Click::Missed);
        assert_eq!(handle_click(&mut s, viewport(), 99, 39, now), Click::Missed);
        assert_eq!(s.current_index(), 0);
        assert!(s.store().iter().all(|q| q.user_answer().is_none()));
        assert!(s.pending().is_none());
    }

    #[test]
    fn three_question_scenario_scores_two() {
        let mut s = session(&["A", "B", "C"]);
        let mut now = Instant::now();
        for index in [0, 1, 0] {
            click_option(&mut s, index, now);
            now += DELAY;
            s.tick(now);
        }
        assert_eq!(s.mode(), Mode::Finished);
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn restart_button_only_works_when_finished() {
        let mut s = session(&["A"]);
        let (x, y) = restart_point();
        let now = Instant::now();
        // Mid-quiz the restart spot is just empty space or an option.
        let click = handle_click(&mut s, viewport(), x, y, now);
        assert_ne!(click, Click::Restarted);

        let mut s = session(&["A"]);
        click_option(&mut s, 0, now);
        s.tick(now + DELAY);
        assert_eq!(s.mode(), Mode::Finished);

        assert_eq!(handle_click(&mut s, viewport(), 0, 0, now), Click::Missed);
        assert_eq!(s.mode(), Mode::Finished);

        assert_eq!(handle_click(&mut s, viewport(), x, y, now), Click::Restarted);
        assert_eq!(s.mode(), Mode::InProgress);
        assert_eq!(s.current_question().unwrap().user_answer(), None);
    }

    #[test]
    fn empty_quiz_offers_restart_without_panicking() {
        let mut s = QuizSession::new(Default::default(), DELAY);
        let (x, y) = restart_point();
        let click = handle_click(&mut s, viewport(), x, y, Instant::now());
        assert_eq!(click, Click::Restarted);
        assert_eq!(s.mode(), Mode::Finished);
    }

    #[test]
    fn hover_follows_mode() {
        let mut s = session(&["A"]);
        let (x, y) = option_point(2);
        assert_eq!(hover_target(&s, viewport(), x, y), Some(Hover::Option(2)));
        assert_eq!(hover_target(&s, viewport(), 0, 0), None);

        s.restart();
        s.select('A', Instant::now());
        s.tick(Instant::now() + DELAY);
        let (x, y) = restart_point();
        assert_eq!(hover_target(&s, viewport(), x, y), Some(Hover::Restart));
    }
}
