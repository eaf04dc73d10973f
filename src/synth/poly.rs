use crate::theory::Note;

use super::{
    message::{MessageReceiver, SynthMessage},
    voice::{Voice, VoiceState},
};

/// Gain applied to the voice sum so two full-velocity notes stay under 1.0.
const HEADROOM: f32 = 0.35;

/// Fixed pool of voices driven by [`SynthMessage`]s.
///
/// Lives on the audio thread. Messages are drained at the start of every
/// block; nothing allocates after construction.
pub struct PolySynth<R: MessageReceiver> {
    voices: Vec<Voice>,
    rx: R,
    frame_counter: u64,
}

impl<R: MessageReceiver> PolySynth<R> {
    pub fn new(sample_rate: f32, max_voices: usize, rx: R) -> Self {
        Self {
            voices: (0..max_voices.max(1))
                .map(|_| Voice::new(sample_rate))
                .collect(),
            rx,
            frame_counter: 0,
        }
    }

    /// Overwrite `out` with the next block of mono audio.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Some(msg) = self.rx.pop() {
            self.handle(msg);
        }

        out.fill(0.0);
        for voice in &mut self.voices {
            voice.render_add(out);
        }
        for sample in out.iter_mut() {
            *sample = (*sample * HEADROOM).clamp(-1.0, 1.0);
        }

        self.frame_counter += out.len() as u64;
    }

    fn handle(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn { note, velocity } => {
                let age = self.frame_counter;
                if let Some(voice) = self.allocate_voice() {
                    voice.start(note, velocity, age);
                }
            }
            SynthMessage::NoteOff { note } => {
                if let Some(voice) = self.find_voice(note) {
                    voice.release();
                }
            }
            SynthMessage::AllNotesOff => {
                for voice in &mut self.voices {
                    voice.release();
                }
            }
        }
    }

    /// A free voice, else the oldest releasing one, else the oldest of all.
    fn allocate_voice(&mut self) -> Option<&mut Voice> {
        if let Some(idx) = self.voices.iter().position(Voice::is_free) {
            return self.voices.get_mut(idx);
        }

        let steal = self
            .voices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.state() == VoiceState::Releasing)
            .min_by_key(|(_, v)| v.age())
            .or_else(|| self.voices.iter().enumerate().min_by_key(|(_, v)| v.age()))
            .map(|(idx, _)| idx);

        steal.and_then(|idx| self.voices.get_mut(idx))
    }

    fn find_voice(&mut self, note: Note) -> Option<&mut Voice> {
        self.voices
            .iter_mut()
            .find(|v| v.state() == VoiceState::Active && v.note() == Some(note))
    }

    #[cfg(test)]
    fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    /// Notes currently held or releasing.
    #[cfg(test)]
    fn sounding_notes(&self) -> impl Iterator<Item = Note> + '_ {
        self.voices.iter().filter_map(|v| v.note())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn synth(voices: usize) -> PolySynth<VecDeque<SynthMessage>> {
        PolySynth::new(SAMPLE_RATE, voices, VecDeque::new())
    }

    fn peak(buf: &[f32]) -> f32 {
        buf.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn silent_without_notes() {
        let mut synth = synth(4);
        let mut buf = vec![1.0; 256];
        synth.render_block(&mut buf);
        assert_eq!(peak(&buf), 0.0);
    }

    #[test]
    fn interval_sounds_then_decays() {
        let mut synth = synth(4);
        let g4 = Note::new(67).unwrap();
        synth.rx.push_back(SynthMessage::NoteOn { note: Note::C4, velocity: 127 });
        synth.rx.push_back(SynthMessage::NoteOn { note: g4, velocity: 127 });

        let mut buf = vec![0.0; 512];
        synth.render_block(&mut buf);
        assert_eq!(synth.active_voices(), 2);
        assert!(peak(&buf) > 0.01);
        assert!(peak(&buf) <= 1.0);

        synth.rx.push_back(SynthMessage::NoteOff { note: Note::C4 });
        synth.rx.push_back(SynthMessage::NoteOff { note: g4 });
        // release is 120 ms; render half a second
        for _ in 0..48 {
            synth.render_block(&mut buf);
        }
        assert_eq!(synth.active_voices(), 0);
        assert_eq!(peak(&buf), 0.0);
        assert_eq!(synth.sounding_notes().count(), 0);
    }

    #[test]
    fn steals_when_full() {
        let mut synth = synth(2);
        let mut buf = vec![0.0; 64];
        for value in [60, 64, 67] {
            let note = Note::new(value).unwrap();
            synth.rx.push_back(SynthMessage::NoteOn { note, velocity: 100 });
            synth.render_block(&mut buf);
        }
        assert_eq!(synth.active_voices(), 2);
        let notes: Vec<u8> = synth.sounding_notes().map(Note::value).collect();
        assert!(notes.contains(&67));
        assert!(!notes.contains(&60), "oldest voice should be stolen");
    }

    #[test]
    fn all_notes_off_releases_everything() {
        let mut synth = synth(4);
        let mut buf = vec![0.0; 128];
        synth.rx.push_back(SynthMessage::NoteOn { note: Note::C4, velocity: 90 });
        synth.rx.push_back(SynthMessage::NoteOn { note: Note::C5, velocity: 90 });
        synth.render_block(&mut buf);

        synth.rx.push_back(SynthMessage::AllNotesOff);
        synth.render_block(&mut buf);
        assert!(synth
            .voices
            .iter()
            .filter(|v| v.is_active())
            .all(|v| v.state() == VoiceState::Releasing));
    }
}
