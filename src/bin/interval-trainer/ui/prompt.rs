//! Prompt area - feedback, countdown, status line, per-round results

use interval_trainer::game::{DisplayState, GameState, Outcome};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_prompt(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let feedback_color = match display.history.last().map(|r| r.outcome) {
        Some(Outcome::Correct) => Color::Green,
        Some(Outcome::Incorrect { .. }) => Color::Red,
        Some(Outcome::Timeout) => Color::Yellow,
        None => Color::White,
    };
    let timer_color = if display.state == GameState::Guess && display.remaining_secs < 1.0 {
        Color::Red
    } else {
        Color::White
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            display.feedback.clone(),
            Style::default().fg(feedback_color),
        )),
        Line::default(),
        Line::from(Span::styled(display.time_text(), Style::default().fg(timer_color))),
        Line::from(display.status.clone()),
        Line::default(),
        results_line(display),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// One cell per round: the interval name, colored by outcome.
fn results_line(display: &DisplayState) -> Line<'static> {
    let mut spans = Vec::with_capacity(display.max_rounds as usize);
    for round in 0..display.max_rounds as usize {
        let span = match display.history.get(round) {
            Some(record) => {
                let color = if record.outcome == Outcome::Correct {
                    Color::Green
                } else {
                    Color::Red
                };
                Span::styled(
                    format!(" {:<3}", record.interval.name()),
                    Style::default().fg(color),
                )
            }
            None => Span::styled(" ·  ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
    }
    Line::from(spans)
}
