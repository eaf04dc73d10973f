//! Trainer settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

use crate::{
    error::{Error, Result},
    theory::{interval::HIGHEST_ROOT, Note},
};

pub const TITLE: &str = "Interval Ear Training";

/// Game settings. Build with [`TrainerConfig::default`] and the chained
/// setters, then call [`validate`](TrainerConfig::validate).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Rounds per game.
    pub max_rounds: u32,
    /// Time allowed to answer, counted after playback ends.
    pub time_limit: Duration,
    /// How long each note (or the chord) sounds.
    pub note_duration: Duration,
    /// Main loop frequency in Hz.
    pub tick_rate: u32,
    pub lowest_root: Note,
    pub highest_root: Note,
    /// MIDI-style velocity, 0-127.
    pub velocity: u8,
    /// Keyboard diagram shown under the game text.
    pub keyboard_layout: PathBuf,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            time_limit: Duration::from_millis(5000),
            note_duration: Duration::from_millis(1000),
            tick_rate: 60,
            lowest_root: Note::C4,
            highest_root: Note::C5,
            velocity: 127,
            keyboard_layout: PathBuf::from("assets/keyboard-layout.txt"),
        }
    }
}

impl TrainerConfig {
    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn note_duration(mut self, duration: Duration) -> Self {
        self.note_duration = duration;
        self
    }

    pub fn tick_rate(mut self, hz: u32) -> Self {
        self.tick_rate = hz;
        self
    }

    /// Roots are drawn uniformly from `lowest..=highest`.
    pub fn root_range(mut self, lowest: Note, highest: Note) -> Self {
        self.lowest_root = lowest;
        self.highest_root = highest;
        self
    }

    pub fn velocity(mut self, velocity: u8) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn keyboard_layout(mut self, path: impl Into<PathBuf>) -> Self {
        self.keyboard_layout = path.into();
        self
    }

    /// Duration of one main-loop iteration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(Error::Config("max_rounds must be at least 1".into()));
        }
        if self.tick_rate == 0 {
            return Err(Error::Config("tick_rate must be at least 1 Hz".into()));
        }
        if self.time_limit.is_zero() {
            return Err(Error::Config("time_limit must be positive".into()));
        }
        if self.note_duration.is_zero() {
            return Err(Error::Config("note_duration must be positive".into()));
        }
        if self.velocity > 127 {
            return Err(Error::Config(format!(
                "velocity {} is above 127",
                self.velocity
            )));
        }
        if self.lowest_root > self.highest_root {
            return Err(Error::Config(format!(
                "root range {}..={} is empty",
                self.lowest_root, self.highest_root
            )));
        }
        if self.highest_root > HIGHEST_ROOT {
            return Err(Error::Config(format!(
                "highest root {} leaves no room for an octave above it (max {})",
                self.highest_root, HIGHEST_ROOT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrainerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.time_limit, Duration::from_millis(5000));
        assert_eq!(config.note_duration, Duration::from_millis(1000));
    }

    #[test]
    fn tick_interval_matches_rate() {
        let config = TrainerConfig::default().tick_rate(50);
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn rejects_bad_values() {
        let base = TrainerConfig::default();
        assert!(base.clone().max_rounds(0).validate().is_err());
        assert!(base.clone().tick_rate(0).validate().is_err());
        assert!(base.clone().time_limit(Duration::ZERO).validate().is_err());
        assert!(base.clone().note_duration(Duration::ZERO).validate().is_err());
        assert!(base.clone().velocity(200).validate().is_err());
        assert!(base
            .clone()
            .root_range(Note::C5, Note::C4)
            .validate()
            .is_err());
        assert!(base
            .clone()
            .root_range(Note::C4, Note::MAX)
            .validate()
            .is_err());
        assert!(base.root_range(Note::C4, HIGHEST_ROOT).validate().is_ok());
    }
}
