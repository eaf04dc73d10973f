//! AudioPlayer backed by the synth running on the audio thread.

use std::{thread, time::Duration};

use interval_trainer::{
    audio::AudioPlayer,
    synth::SynthMessage,
    theory::Note,
};
use log::warn;
use rtrb::Producer;

/// Sends note messages to the audio thread and sleeps while they sound.
pub struct SynthPlayer {
    tx: Producer<SynthMessage>,
    velocity: u8,
}

impl SynthPlayer {
    pub fn new(tx: Producer<SynthMessage>, velocity: u8) -> Self {
        Self { tx, velocity }
    }

    fn send(&mut self, msg: SynthMessage) {
        if self.tx.push(msg).is_err() {
            warn!("synth queue full, dropped {msg:?}");
        }
    }
}

impl AudioPlayer for SynthPlayer {
    fn play_notes(&mut self, notes: &[Note], duration: Duration) {
        for &note in notes {
            self.send(SynthMessage::NoteOn {
                note,
                velocity: self.velocity,
            });
        }

        thread::sleep(duration);

        for &note in notes {
            self.send(SynthMessage::NoteOff { note });
        }
    }
}

impl Drop for SynthPlayer {
    fn drop(&mut self) {
        self.send(SynthMessage::AllNotesOff);
    }
}
