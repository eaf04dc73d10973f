//! Intervals and the random interval generator.

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

use super::notes::Note;

/// Largest interval the trainer asks about (an octave).
pub const MAX_SEMITONES: u8 = 12;

/// Highest root that still leaves room for an octave above it.
pub const HIGHEST_ROOT: Note = match Note::new(Note::MAX.value() - MAX_SEMITONES) {
    Some(note) => note,
    None => Note::MIN,
};

/// Short names indexed by semitone count.
pub const INTERVAL_NAMES: [&str; MAX_SEMITONES as usize + 1] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "T", "P5", "m6", "M6", "m7", "M7", "P8",
];

/// Short name for a semitone count, e.g. `7 -> "P5"`. `None` above 12.
pub fn interval_name(semitones: u8) -> Option<&'static str> {
    INTERVAL_NAMES.get(semitones as usize).copied()
}

/// Two notes and the distance between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    root: Note,
    second: Note,
    semitones: u8,
}

impl Interval {
    /// Build the interval `semitones` above `root`.
    ///
    /// Returns `None` when `semitones > 12` or the upper note would leave
    /// the note range.
    pub fn above(root: Note, semitones: u8) -> Option<Self> {
        if semitones > MAX_SEMITONES {
            return None;
        }
        let second = root.transpose(semitones as i16)?;
        Some(Self {
            root,
            second,
            semitones,
        })
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn second(&self) -> Note {
        self.second
    }

    pub fn semitones(&self) -> u8 {
        self.semitones
    }

    pub fn name(&self) -> &'static str {
        // semitones <= 12 is checked in `above`
        INTERVAL_NAMES[self.semitones as usize]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.name(), self.root, self.second)
    }
}

/// How the two notes of an interval are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// One note after the other.
    Melodic,
    /// Both notes at once.
    Harmonic,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Melodic => write!(f, "melodic"),
            PlaybackMode::Harmonic => write!(f, "harmonic"),
        }
    }
}

/// Produces random intervals whose roots fall in a fixed range.
///
/// The range is inclusive on both ends and is clamped so that an octave above
/// the highest root is still a valid [`Note`].
pub struct IntervalGenerator<R = StdRng> {
    rng: R,
    lowest_root: Note,
    highest_root: Note,
}

impl IntervalGenerator<StdRng> {
    /// Generator seeded from the operating system, roots `C4..=C5`.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator, roots `C4..=C5`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IntervalGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            lowest_root: Note::C4,
            highest_root: Note::C5,
        }
    }

    /// Restrict roots to `lowest..=highest`.
    pub fn with_root_range(mut self, lowest: Note, highest: Note) -> Self {
        self.highest_root = highest.min(HIGHEST_ROOT);
        self.lowest_root = lowest.min(self.highest_root);
        self
    }

    pub fn generate(&mut self) -> Interval {
        let root = self
            .rng
            .random_range(self.lowest_root.value()..=self.highest_root.value());
        let semitones = self.rng.random_range(0..=MAX_SEMITONES);

        let interval = Note::new(root)
            .and_then(|root| Interval::above(root, semitones))
            .expect("root range is clamped to HIGHEST_ROOT");
        debug!("generated interval {interval}");
        interval
    }

    /// Melodic or harmonic, with equal probability.
    pub fn pick_mode(&mut self) -> PlaybackMode {
        if self.rng.random_bool(0.5) {
            PlaybackMode::Melodic
        } else {
            PlaybackMode::Harmonic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_semitones() {
        assert_eq!(interval_name(0), Some("P1"));
        assert_eq!(interval_name(3), Some("m3"));
        assert_eq!(interval_name(6), Some("T"));
        assert_eq!(interval_name(7), Some("P5"));
        assert_eq!(interval_name(12), Some("P8"));
        assert_eq!(interval_name(13), None);
        assert_eq!(interval_name(u8::MAX), None);
    }

    #[test]
    fn above_checks_bounds() {
        assert!(Interval::above(Note::C4, 13).is_none());
        assert!(Interval::above(Note::MAX, 1).is_none());

        let fifth = Interval::above(Note::C4, 7).unwrap();
        assert_eq!(fifth.second().value(), 67);
        assert_eq!(fifth.name(), "P5");
        assert_eq!(fifth.to_string(), "P5 (C4 -> G4)");
    }

    #[test]
    fn generated_intervals_are_well_formed() {
        for seed in 0..32 {
            let mut generator = IntervalGenerator::seeded(seed);
            for _ in 0..200 {
                let interval = generator.generate();
                assert!(interval.semitones() <= MAX_SEMITONES);
                assert_eq!(
                    interval.second().value() - interval.root().value(),
                    interval.semitones()
                );
                assert!(interval.root() >= Note::C4 && interval.root() <= Note::C5);
                assert!(interval.second() <= Note::MAX);
            }
        }
    }

    #[test]
    fn every_semitone_count_shows_up() {
        let mut generator = IntervalGenerator::seeded(7);
        let mut seen = [false; 13];
        for _ in 0..2_000 {
            seen[generator.generate().semitones() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing semitones: {seen:?}");
    }

    #[test]
    fn both_modes_are_picked() {
        let mut generator = IntervalGenerator::seeded(3);
        let melodic = (0..1_000)
            .filter(|_| generator.pick_mode() == PlaybackMode::Melodic)
            .count();
        assert!((300..700).contains(&melodic), "melodic picked {melodic} times");
    }

    #[test]
    fn root_range_is_clamped() {
        let mut generator = IntervalGenerator::seeded(5).with_root_range(Note::MAX, Note::MAX);
        for _ in 0..100 {
            let interval = generator.generate();
            assert_eq!(interval.root(), HIGHEST_ROOT);
        }
    }

    #[test]
    fn custom_root_range() {
        let low = Note::new(40).unwrap();
        let high = Note::new(42).unwrap();
        let mut generator = IntervalGenerator::seeded(11).with_root_range(low, high);
        for _ in 0..100 {
            let root = generator.generate().root();
            assert!(root >= low && root <= high);
        }
    }
}
