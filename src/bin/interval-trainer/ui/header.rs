//! Header bar - title, round counter, score

use interval_trainer::game::DisplayState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_header(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(inner);

    let round = Paragraph::new(format!(" Round {}/{}", display.round_number, display.max_rounds))
        .style(Style::default().fg(Color::DarkGray));
    let title = Paragraph::new(display.title)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    let score = Paragraph::new(format!("{} ", display.score_text))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(round, columns[0]);
    frame.render_widget(title, columns[1]);
    frame.render_widget(score, columns[2]);
}
