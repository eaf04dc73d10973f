//! Abstract input events delivered to the round state machine.

use std::{collections::VecDeque, io};

/// A key as the trainer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    /// Any other key (arrows, function keys, ...). Still counts as
    /// "any key" on the game-over screen.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close, Ctrl+C, or similar.
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    /// Quit and Escape both end the game from any interactive state.
    pub fn is_exit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }
}

/// A non-blocking source of input events.
pub trait InputSource {
    /// Return every event buffered since the last poll, without waiting.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Throw away anything buffered.
    fn discard_pending(&mut self) -> io::Result<()> {
        self.poll_events().map(drop)
    }
}

/// In-memory event queue, handy for scripted sessions and tests.
impl InputSource for VecDeque<InputEvent> {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.drain(..).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_events() {
        assert!(InputEvent::Quit.is_exit());
        assert!(InputEvent::KeyDown(Key::Escape).is_exit());
        assert!(!InputEvent::KeyDown(Key::Char('q')).is_exit());
        assert!(!InputEvent::KeyDown(Key::Other).is_exit());
    }

    #[test]
    fn queue_drains() {
        let mut queue: VecDeque<InputEvent> =
            [InputEvent::KeyDown(Key::Char('s')), InputEvent::Quit].into();
        queue.discard_pending().unwrap();
        assert!(queue.poll_events().unwrap().is_empty());
    }
}
