//! Mapping from keyboard keys to semitone counts.
//!
//! The default layout puts the white keys of a piano on the home row
//! (`s d f g h j k l`) and the black keys on the row above
//! (`e r y u i`), starting from the root on `s`:
//!
//! ```text
//!    e   r       y   u   i
//!  s   d   f   g   h   j   k   l
//!  P1  M2  M3  P4  P5  M6  M7  P8
//! ```

use crate::{
    error::KeymapError,
    input::Key,
    theory::interval::{INTERVAL_NAMES, MAX_SEMITONES},
};

const ENTRIES: usize = MAX_SEMITONES as usize + 1;

/// Keys in ascending semitone order.
pub const DEFAULT_KEYS: [char; ENTRIES] = [
    's', 'e', 'd', 'r', 'f', 'g', 'y', 'h', 'u', 'j', 'i', 'k', 'l',
];

/// A validated one-to-one mapping of 13 keys onto semitones `0..=12`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    /// Indexed by semitone count.
    keys: [char; ENTRIES],
}

impl Keymap {
    /// Build a mapping from `(key, semitones)` pairs in any order.
    ///
    /// Every semitone from 0 to 12 must appear exactly once and no key may
    /// be reused. Keys are compared case-insensitively.
    pub fn new(entries: &[(char, u8)]) -> Result<Self, KeymapError> {
        if entries.len() != ENTRIES {
            return Err(KeymapError::WrongLength(entries.len()));
        }

        let mut keys: [Option<char>; ENTRIES] = [None; ENTRIES];
        for (i, &(key, semitones)) in entries.iter().enumerate() {
            if semitones > MAX_SEMITONES {
                return Err(KeymapError::SemitoneOutOfRange(semitones));
            }
            let key = key.to_ascii_lowercase();
            if entries[..i]
                .iter()
                .any(|&(other, _)| other.to_ascii_lowercase() == key)
            {
                return Err(KeymapError::DuplicateKey(key));
            }
            let slot = &mut keys[semitones as usize];
            if slot.is_some() {
                return Err(KeymapError::DuplicateSemitone(semitones));
            }
            *slot = Some(key);
        }

        // 13 entries, no duplicate semitones, all in range: every slot is filled
        Ok(Self {
            keys: keys.map(|key| key.unwrap_or_default()),
        })
    }

    /// Build a mapping where `keys[n]` plays `n` semitones.
    pub fn from_ascending(keys: [char; ENTRIES]) -> Result<Self, KeymapError> {
        let entries: Vec<(char, u8)> = keys
            .iter()
            .enumerate()
            .map(|(semitones, &key)| (key, semitones as u8))
            .collect();
        Self::new(&entries)
    }

    /// Semitone count for a key, if it is mapped.
    pub fn semitones(&self, key: Key) -> Option<u8> {
        let Key::Char(c) = key else {
            return None;
        };
        let c = c.to_ascii_lowercase();
        self.keys.iter().position(|&k| k == c).map(|i| i as u8)
    }

    /// Key that answers with `semitones`.
    pub fn key_for(&self, semitones: u8) -> Option<char> {
        self.keys.get(semitones as usize).copied()
    }

    /// `(key, interval name)` pairs in ascending order, for help text.
    pub fn legend(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.keys.iter().copied().zip(INTERVAL_NAMES)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS,
        }
    }
}
