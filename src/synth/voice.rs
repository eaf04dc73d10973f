use crate::theory::Note;

use super::{envelope::Envelope, oscillator::Oscillator};

/// Level of the octave-up triangle relative to the sine fundamental.
const OVERTONE_MIX: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,
    Active,
    Releasing,
}

/// One sounding note.
#[derive(Debug, Clone)]
pub struct Voice {
    note: Option<Note>,
    frequency: f32,
    gain: f32,
    state: VoiceState,
    age: u64,
    sample_rate: f32,
    fundamental: Oscillator,
    overtone: Oscillator,
    envelope: Envelope,
}

impl Voice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            note: None,
            frequency: 0.0,
            gain: 0.0,
            state: VoiceState::Free,
            age: 0,
            sample_rate,
            fundamental: Oscillator::sine(),
            overtone: Oscillator::triangle(),
            envelope: Envelope::piano(sample_rate),
        }
    }

    /// `age` orders voices for stealing; larger is newer.
    pub fn start(&mut self, note: Note, velocity: u8, age: u64) {
        self.note = Some(note);
        self.frequency = note.frequency();
        self.gain = velocity.min(127) as f32 / 127.0;
        self.state = VoiceState::Active;
        self.age = age;

        self.fundamental.reset();
        self.overtone.reset();
        self.envelope.note_on();
    }

    pub fn release(&mut self) {
        if self.state == VoiceState::Active {
            self.state = VoiceState::Releasing;
            self.envelope.note_off();
        }
    }

    /// Add this voice into `out`.
    pub fn render_add(&mut self, out: &mut [f32]) {
        if self.state == VoiceState::Free {
            return;
        }

        for sample in out.iter_mut() {
            let tone = self.fundamental.next_sample(self.frequency, self.sample_rate)
                + OVERTONE_MIX
                    * self
                        .overtone
                        .next_sample(self.frequency * 2.0, self.sample_rate);
            *sample += tone * self.envelope.next_sample() * self.gain;
        }

        if self.state == VoiceState::Releasing && !self.envelope.is_active() {
            self.free();
        }
    }

    fn free(&mut self) {
        self.state = VoiceState::Free;
        self.note = None;
    }

    pub fn is_free(&self) -> bool {
        self.state == VoiceState::Free
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, VoiceState::Active | VoiceState::Releasing)
    }

    pub fn note(&self) -> Option<Note> {
        self.note
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}
