//! The audio side of a round: what gets played, and in what order.

use std::{io, time::Duration};

use crate::{
    input::InputSource,
    theory::{Interval, Note, PlaybackMode},
};

/// Something that can sound notes.
///
/// `play_notes` turns every note on, holds them for `duration`, then turns
/// them off. It blocks the caller for the full duration.
pub trait AudioPlayer {
    fn play_notes(&mut self, notes: &[Note], duration: Duration);
}

/// Play an interval the way a round presents it.
///
/// Melodic: root, drop buffered input, then the second note.
/// Harmonic: drop buffered input, then both notes together.
///
/// Input that arrives while the last note sounds stays buffered and is seen
/// by the next poll.
pub fn play_interval(
    player: &mut dyn AudioPlayer,
    input: &mut dyn InputSource,
    interval: &Interval,
    mode: PlaybackMode,
    duration: Duration,
) -> io::Result<()> {
    match mode {
        PlaybackMode::Melodic => {
            player.play_notes(&[interval.root()], duration);
            input.discard_pending()?;
            player.play_notes(&[interval.second()], duration);
        }
        PlaybackMode::Harmonic => {
            input.discard_pending()?;
            player.play_notes(&[interval.root(), interval.second()], duration);
        }
    }
    Ok(())
}

/// Records what it was asked to play instead of making sound.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct SilentPlayer {
    pub played: Vec<(Vec<Note>, Duration)>,
}

#[cfg(test)]
impl AudioPlayer for SilentPlayer {
    fn play_notes(&mut self, notes: &[Note], duration: Duration) {
        self.played.push((notes.to_vec(), duration));
    }
}
