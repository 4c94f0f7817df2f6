use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::input::Hover;
use crate::layout::QuizLayout;
use crate::models::{Choice, Question};

const IDLE: Color = Color::Rgb(70, 70, 70);
const HOVER: Color = Color::Rgb(100, 150, 255);

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = QuizLayout::new(area, question.options.len());

    let index = session.current_index();
    render_progress(frame, layout.progress, index, session.total_questions());
    render_prompt(frame, layout.prompt, index, &question.prompt);

    let hovered = match app.hover() {
        Some(Hover::Option(index)) => Some(index),
        _ => None,
    };
    let awaiting_advance = session
        .pending()
        .is_some_and(|pending| pending.question_index == index);

    for (i, (option, rect)) in question.options.iter().zip(&layout.options).enumerate() {
        let fill = if awaiting_advance && is_chosen(question, option) {
            blink(app.frame())
        } else if hovered == Some(i) {
            HOVER
        } else {
            IDLE
        };
        render_option(frame, *rect, option, fill);
    }

    render_controls(frame, layout.controls);
}

fn is_chosen(question: &Question, option: &Choice) -> bool {
    question.user_answer() == Some(option.key)
}

/// Green pulsing between dim and bright.
fn blink(frame: u64) -> Color {
    let phase = ((frame as f64 * 0.2).sin() + 1.0) / 2.0;
    Color::Rgb(0, (100.0 + phase * 155.0) as u8, 0)
}

fn render_progress(frame: &mut Frame, area: Rect, index: usize, total: usize) {
    let widget = Paragraph::new(format!("{}/{}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, index: usize, prompt: &str) {
    let widget = Paragraph::new(format!("Question {}: {}", index + 1, prompt))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_option(frame: &mut Frame, area: Rect, option: &Choice, fill: Color) {
    if area.is_empty() {
        return;
    }
    let widget = Paragraph::new(format!("{}. {}", option.key, option.text))
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(fill))
                .padding(Padding::horizontal(1)),
        )
        .bg(fill);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("click an option  ·  a/b/c select  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
