//! Terminal keyboard input via crossterm.

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use interval_trainer::input::{InputEvent, InputSource, Key};

/// Non-blocking reader over crossterm's event queue.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?) {
                events.push(ev);
            }
        }
        Ok(events)
    }
}

/// Key presses only; repeats, releases, mouse and resize are dropped.
fn translate(event: Event) -> Option<InputEvent> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };
    if kind != KeyEventKind::Press {
        return None;
    }

    // raw mode swallows SIGINT
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c' | 'C')) {
        return Some(InputEvent::Quit);
    }

    let key = match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => Key::Other,
    };
    Some(InputEvent::KeyDown(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn maps_keys() {
        assert_eq!(
            translate(press(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(InputEvent::KeyDown(Key::Char('h')))
        );
        assert_eq!(
            translate(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::KeyDown(Key::Escape))
        );
        assert_eq!(
            translate(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::KeyDown(Key::Other))
        );
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn ignores_releases_and_resizes() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(translate(release), None);
        assert_eq!(translate(Event::Resize(80, 24)), None);
    }
}
