//! Score and message state for one game.

use std::time::{Duration, Instant};

use crate::theory::{interval_name, Interval, PlaybackMode};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { guess: u8 },
    Timeout,
}

impl Outcome {
    /// Feedback line shown after the round.
    pub fn message(&self, interval: &Interval) -> String {
        match self {
            Outcome::Correct => format!("Correct! The interval was {}.", interval.name()),
            Outcome::Incorrect { guess } => {
                let entered = match interval_name(*guess) {
                    Some(name) => name.to_owned(),
                    None => format!("{guess} semitones"),
                };
                format!(
                    "Incorrect! You entered {entered}. The correct interval was {}.",
                    interval.name()
                )
            }
            Outcome::Timeout => {
                format!("Too slow! The correct interval was {}.", interval.name())
            }
        }
    }
}

/// One finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub interval: Interval,
    pub mode: PlaybackMode,
    pub outcome: Outcome,
}

/// Everything the state machine mutates between rounds.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// 1-based number of the round in progress; 0 before the first round.
    pub round_number: u32,
    pub correct: u32,
    pub feedback: String,
    pub status: String,
    pub guess_start: Option<Instant>,
    pub guess_deadline: Option<Instant>,
    /// Time spent guessing in the current round, clamped to the limit.
    pub elapsed: Duration,
    pub history: Vec<RoundRecord>,
}

impl Session {
    /// Rounds that ended with an answer or a timeout.
    pub fn attempted(&self) -> u32 {
        self.history.len() as u32
    }

    /// `"correct/attempted"`.
    pub fn score_text(&self) -> String {
        format!("{}/{}", self.correct, self.attempted())
    }

    /// Store the outcome of the current round and update the score.
    pub fn record(&mut self, record: RoundRecord) {
        if record.outcome == Outcome::Correct {
            self.correct += 1;
        }
        self.feedback = record.outcome.message(&record.interval);
        self.history.push(record);
    }

    /// Back to a blank game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
