//! TUI for the trainer
//!
//! Draws the read-only `DisplayState` produced by each tick.

mod header;
mod keyboard;
mod prompt;

use interval_trainer::{game::DisplayState, keymap::Keymap, layout::KeyboardLayout};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use header::render_header;
use keyboard::render_keyboard;
use prompt::render_prompt;

/// Render one frame
pub fn render(frame: &mut Frame, display: &DisplayState, layout: &KeyboardLayout, keymap: &Keymap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title, round, score
            Constraint::Min(7),                      // Feedback, timer, status, results
            Constraint::Length(layout.height() + 2), // Keyboard diagram
            Constraint::Length(1),                   // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], display);
    render_prompt(frame, chunks[1], display);
    render_keyboard(frame, chunks[2], layout, keymap);

    let help = Paragraph::new(" Press the key for the interval you hear  [Esc] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
