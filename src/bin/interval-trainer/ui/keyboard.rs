//! Keyboard diagram widget

use interval_trainer::{keymap::Keymap, layout::KeyboardLayout};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the loaded diagram centered in a bordered box. The border title
/// lists the mapping so it stays readable when the diagram is clipped.
pub fn render_keyboard(frame: &mut Frame, area: Rect, layout: &KeyboardLayout, keymap: &Keymap) {
    let legend: Vec<String> = keymap
        .legend()
        .map(|(key, name)| format!("{key}={name}"))
        .collect();
    let block = Block::default()
        .title(format!(" {} ", legend.join(" ")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the diagram as a block, not line by line
    let width = layout.width().min(inner.width);
    let diagram_area = Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    };

    let lines: Vec<Line> = layout.lines().iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(Paragraph::new(lines), diagram_area);
}
