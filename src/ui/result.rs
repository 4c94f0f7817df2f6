use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, canvas::Canvas},
};

use crate::app::App;
use crate::effects::{self, Sprite};
use crate::input::Hover;
use crate::layout::ResultLayout;
use crate::scoring::Tier;

const SCORE_COLOR: Color = Color::Rgb(255, 200, 0);
const RESTART: Color = Color::Rgb(200, 50, 50);
const RESTART_HOVER: Color = Color::Rgb(255, 100, 100);

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.score();
    let total = session.total_questions();
    let tier = session.tier();
    let layout = ResultLayout::new(area);

    if app.effects_enabled() {
        render_animation(frame, area, tier, app.frame());
    }

    render_line(
        frame,
        layout.title,
        Line::from("Quiz Results").style(Style::default().fg(Color::Cyan).bold()),
    );
    render_line(
        frame,
        layout.message,
        Line::from(tier.message(score)).fg(Color::White),
    );
    render_line(
        frame,
        layout.score,
        Line::from(format!(
            "Score: {}/{}  ({:.0}%)",
            score,
            total,
            calculate_percentage(score, total)
        ))
        .style(Style::default().fg(SCORE_COLOR).bold()),
    );
    if tier == Tier::NeedsImprovement && app.effects_enabled() {
        render_line(frame, layout.caption, Line::from("Keep going!").fg(Color::White));
    }

    let hovered = app.hover() == Some(Hover::Restart);
    render_restart(frame, layout.restart, hovered);
    render_line(
        frame,
        layout.controls,
        Line::from("click Restart or press r  ·  q quit").fg(Color::DarkGray),
    );
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        100.0
    }
}

fn render_animation(frame: &mut Frame, area: Rect, tier: Tier, tick: u64) {
    let width = area.width as f64;
    // Braille cells are twice as tall as wide.
    let height = area.height as f64 * 2.0;
    let sprites = effects::celebration(tier, tick, width, height, &mut rand::thread_rng());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for sprite in &sprites {
                match sprite {
                    Sprite::Circle(circle) => ctx.draw(circle),
                    Sprite::Line(line) => ctx.draw(line),
                }
            }
        });
    frame.render_widget(canvas, area);
}

/// Centre `line` in `row`, clearing only the cells the text covers.
fn render_line(frame: &mut Frame, row: Rect, line: Line) {
    let width = (line.width() as u16).min(row.width);
    if width == 0 || row.is_empty() {
        return;
    }
    let rect = Rect::new(row.x + (row.width - width) / 2, row.y, width, 1);
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line), rect);
}

fn render_restart(frame: &mut Frame, area: Rect, hovered: bool) {
    if area.is_empty() {
        return;
    }
    let fill = if hovered { RESTART_HOVER } else { RESTART };
    let widget = Paragraph::new("Restart")
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(fill)),
        )
        .bg(fill);
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
