//! Pitch and interval vocabulary used by the trainer.

/// Interval records, names, and the random generator.
pub mod interval;
/// Note numbers, names, and frequencies.
pub mod notes;

pub use interval::{interval_name, Interval, IntervalGenerator, PlaybackMode, INTERVAL_NAMES};
pub use notes::Note;
