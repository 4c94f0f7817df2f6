mod quiz;
mod result;
mod trail;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Mode;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.session().mode() {
        Mode::InProgress => quiz::render(frame, area, app),
        Mode::Finished => result::render(frame, area, app),
    }

    if app.effects_enabled() {
        trail::render(frame.buffer_mut(), area, app.trail());
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::QuizConfig;
    use crate::models::{Choice, Question, QuestionStore};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn quiz() -> QuestionStore {
        vec![
            Question::new(
                "Largest planet?",
                vec![
                    Choice::new('A', "Mars"),
                    Choice::new('B', "Jupiter"),
                    Choice::new('C', "Venus"),
                ],
                "B",
            ),
            Question::new(
                "Smallest prime?",
                vec![
                    Choice::new('A', "2"),
                    Choice::new('B', "1"),
                    Choice::new('C', "3"),
                ],
                "A",
            ),
        ]
        .into()
    }

    #[test]
    fn question_screen_shows_prompt_and_options() {
        let app = App::new(quiz(), QuizConfig::default());
        let screen = draw(&app);
        assert!(screen.contains("Question 1: Largest planet?"), "{screen}");
        assert!(screen.contains("A. Mars"), "{screen}");
        assert!(screen.contains("B. Jupiter"), "{screen}");
        assert!(screen.contains("C. Venus"), "{screen}");
        assert!(screen.contains("1/2"), "{screen}");
    }

    #[test]
    fn empty_quiz_renders_result_screen() {
        let app = App::new(QuestionStore::default(), QuizConfig::default());
        let screen = draw(&app);
        assert!(screen.contains("Score: 0/0"), "{screen}");
        assert!(screen.contains("Restart"), "{screen}");
    }

    #[test]
    fn result_screen_shows_tier_message() {
        let mut app = App::new(quiz(), QuizConfig::default());
        let mut now = Instant::now();
        for key in ['A', 'A'] {
            app.session_mut().select(key, now);
            now += Duration::from_millis(500);
            app.tick(now);
        }
        let screen = draw(&app);
        assert!(screen.contains("Score: 1/2"), "{screen}");
        assert!(screen.contains("Keep practising!"), "{screen}");
        assert!(screen.contains("Keep going!"), "{screen}");
    }

    #[test]
    fn renders_without_effects() {
        let config = QuizConfig {
            effects: false,
            ..QuizConfig::default()
        };
        let app = App::new(QuestionStore::default(), config);
        let screen = draw(&app);
        assert!(screen.contains("Quiz Results"), "{screen}");
    }
}
