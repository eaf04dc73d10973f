#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/*
Note Numbers
============

A `Note` is an integer pitch identifier covering ten octaves of twelve
semitones. The numbering follows MIDI, so the lowest C we support is 12
and the highest note is the B nine octaves and eleven semitones above it:

    C0 = 12   C1 = 24   ...   C4 = 60 (middle C)   ...   B9 = 131

  octave   = (value - 12) / 12
  semitone = (value - 12) % 12     C=0, Db=1, D=2, ... B=11

Names are spelled with flats (Db, Eb, Gb, Ab, Bb), one spelling per
pitch class.

Frequency uses twelve-tone equal temperament around A4 = 69 = 440 Hz:

    f = 440 * 2^((note - 69) / 12)
*/

const PITCH_CLASSES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A pitch in the range `C0..=B9` (12..=131).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(u8);

impl Note {
    /// Lowest representable note (C0).
    pub const MIN: Note = Note(12);
    /// Highest representable note (B9).
    pub const MAX: Note = Note(131);

    /// Middle C.
    pub const C4: Note = Note(60);
    /// Tuning reference, 440 Hz.
    pub const A4: Note = Note(69);
    pub const C5: Note = Note(72);

    /// Create a note, or `None` if `value` is outside `12..=131`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Move up (or down) by a number of semitones, staying in range.
    pub fn transpose(self, semitones: i16) -> Option<Self> {
        let target = self.0 as i16 + semitones;
        u8::try_from(target).ok().and_then(Self::new)
    }

    pub fn octave(self) -> u8 {
        (self.0 - Self::MIN.0) / 12
    }

    pub fn pitch_class(self) -> &'static str {
        PITCH_CLASSES[((self.0 - Self::MIN.0) % 12) as usize]
    }

    /// Equal-tempered frequency in Hz.
    #[inline]
    pub fn frequency(self) -> f32 {
        440.0 * 2.0_f32.powf((self.0 as f32 - 69.0) / 12.0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

/// Returned when converting an out-of-range number into a [`Note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is outside the note range 12..=131")]
pub struct NoteOutOfRange(pub u8);

impl TryFrom<u8> for Note {
    type Error = NoteOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Note::new(value).ok_or(NoteOutOfRange(value))
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> u8 {
        note.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_ten_octaves() {
        assert_eq!(Note::MAX.value() - Note::MIN.value() + 1, 120);
        assert!(Note::new(11).is_none());
        assert!(Note::new(132).is_none());
        assert_eq!(Note::new(12), Some(Note::MIN));
    }

    #[test]
    fn names_follow_octave_numbering() {
        assert_eq!(Note::MIN.to_string(), "C0");
        assert_eq!(Note::C4.to_string(), "C4");
        assert_eq!(Note::new(61).unwrap().to_string(), "Db4");
        assert_eq!(Note::C5.to_string(), "C5");
        assert_eq!(Note::MAX.to_string(), "B9");
    }

    #[test]
    fn transpose_stays_in_range() {
        assert_eq!(Note::C4.transpose(12), Some(Note::C5));
        assert_eq!(Note::C5.transpose(-12), Some(Note::C4));
        assert_eq!(Note::MAX.transpose(1), None);
        assert_eq!(Note::MIN.transpose(-1), None);
    }

    #[test]
    fn a440() {
        assert!((Note::A4.frequency() - 440.0).abs() < 1e-3);
        let a5 = Note::A4.transpose(12).unwrap();
        assert!((a5.frequency() - 880.0).abs() < 1e-2);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(Note::C4 < Note::A4);
        assert_eq!(Note::try_from(60), Ok(Note::C4));
        assert_eq!(Note::try_from(200), Err(NoteOutOfRange(200)));
    }
}
