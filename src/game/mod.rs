//! Round state machine.
//!
//! [`Trainer`] owns the session and advances it one transition per tick.

/// Snapshot for the presentation layer.
pub mod display;
/// Score, messages, and round history.
pub mod session;

use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use std::time::{Duration, Instant};

use crate::{
    audio::{play_interval, AudioPlayer},
    clock::Clock,
    config::{TrainerConfig, TITLE},
    error::Result,
    input::{InputEvent, InputSource, Key},
    keymap::Keymap,
    theory::{Interval, IntervalGenerator, PlaybackMode},
};

pub use display::DisplayState;
pub use session::{Outcome, RoundRecord, Session};

/*
Round State Machine
===================

    ┌───────────┐ round <= max ┌──────────────┐  playback  ┌───────┐
    │ RoundOver │ ───────────→ │ PlayInterval │ ─────────→ │ Guess │ ─┐ waiting
    └───────────┘              └──────────────┘            └───────┘ ←┘
       ↑    │ round > max                                   │   │
       │    ↓                                   answer or   │   │ quit / Esc
       │ ┌──────────┐                           timeout     │   ↓
       │ │ GameOver │ ─── quit / Esc ──────────────────→ ┌──────┐
       │ └──────────┘                                    │ Exit │
       │    │ any other key                              └──────┘
       └────┘ (reset)       ↑ answer/timeout returns to RoundOver

One call to `tick` = one arrow. Transitions read the events polled for that
tick and the clock; nothing else.

PlayInterval is the only transition with an effect: it blocks on the audio
player for the length of the interval. Input polled for that tick is
ignored, and input that arrives during the first melodic note (or before a
harmonic interval starts) is discarded. The guess timer starts only after
playback returns.

In Guess, the timeout is checked before the events. Events are processed
in order: the first quit/Esc exits, the first mapped key ends the round,
unmapped keys are skipped.
*/

const STATUS_PLAYING: &str = "Playing interval...";
const STATUS_GUESS: &str = "Guess the interval!";
const STATUS_GAME_OVER: &str = "Game Over. Press any key to restart or Esc to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    RoundOver,
    PlayInterval,
    Guess,
    GameOver,
    Exit,
}

/// External collaborators a tick may need.
pub struct Io<'a> {
    pub player: &'a mut dyn AudioPlayer,
    pub input: &'a mut dyn InputSource,
    pub clock: &'a dyn Clock,
}

pub struct Trainer<R = StdRng> {
    config: TrainerConfig,
    keymap: Keymap,
    generator: IntervalGenerator<R>,
    state: GameState,
    session: Session,
    current: Option<(Interval, PlaybackMode)>,
}

impl Trainer<StdRng> {
    /// Trainer with an OS-seeded generator.
    pub fn new(config: TrainerConfig, keymap: Keymap) -> Result<Self> {
        Self::with_generator(config, keymap, IntervalGenerator::from_os_rng())
    }
}

impl<R: Rng> Trainer<R> {
    /// Trainer with a caller-supplied generator; its root range is replaced
    /// by the one in `config`.
    pub fn with_generator(
        config: TrainerConfig,
        keymap: Keymap,
        generator: IntervalGenerator<R>,
    ) -> Result<Self> {
        config.validate()?;
        let generator = generator.with_root_range(config.lowest_root, config.highest_root);
        Ok(Self {
            config,
            keymap,
            generator,
            state: GameState::RoundOver,
            session: Session::default(),
            current: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Interval of the round in progress (or the last one played).
    pub fn current_interval(&self) -> Option<Interval> {
        self.current.map(|(interval, _)| interval)
    }

    pub fn current_mode(&self) -> Option<PlaybackMode> {
        self.current.map(|(_, mode)| mode)
    }

    /// Advance by exactly one transition.
    pub fn tick(&mut self, events: &[InputEvent], io: &mut Io<'_>) -> Result<GameState> {
        let next = match self.state {
            GameState::RoundOver => self.start_round(),
            GameState::PlayInterval => self.play_interval(io)?,
            GameState::Guess => self.handle_guess(events, io.clock.now()),
            GameState::GameOver => self.game_over(events),
            GameState::Exit => GameState::Exit,
        };

        if next != self.state {
            debug!("{:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(next)
    }

    fn start_round(&mut self) -> GameState {
        self.session.round_number += 1;
        if self.session.round_number > self.config.max_rounds {
            info!("game over, score {}", self.session.score_text());
            return GameState::GameOver;
        }

        self.session.status = STATUS_PLAYING.to_owned();
        GameState::PlayInterval
    }

    fn play_interval(&mut self, io: &mut Io<'_>) -> Result<GameState> {
        let interval = self.generator.generate();
        let mode = self.generator.pick_mode();
        self.current = Some((interval, mode));
        debug!(
            "round {}: playing {interval} ({mode})",
            self.session.round_number
        );

        play_interval(
            &mut *io.player,
            &mut *io.input,
            &interval,
            mode,
            self.config.note_duration,
        )?;

        let start = io.clock.now();
        self.session.guess_start = Some(start);
        self.session.guess_deadline = Some(start + self.config.time_limit);
        self.session.elapsed = Duration::ZERO;
        self.session.status = STATUS_GUESS.to_owned();
        Ok(GameState::Guess)
    }

    fn handle_guess(&mut self, events: &[InputEvent], now: Instant) -> GameState {
        let Some((interval, mode)) = self.current else {
            return GameState::RoundOver;
        };

        self.session.elapsed = self
            .session
            .guess_start
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start));

        if self.session.elapsed > self.config.time_limit {
            self.session.elapsed = self.config.time_limit;
            self.finish_round(interval, mode, Outcome::Timeout);
            return GameState::RoundOver;
        }

        for event in events {
            if event.is_exit() {
                return GameState::Exit;
            }
            let InputEvent::KeyDown(key) = *event else {
                continue;
            };
            if let Some(guess) = self.keymap.semitones(key) {
                let outcome = if guess == interval.semitones() {
                    Outcome::Correct
                } else {
                    Outcome::Incorrect { guess }
                };
                self.finish_round(interval, mode, outcome);
                return GameState::RoundOver;
            }
        }

        GameState::Guess
    }

    fn finish_round(&mut self, interval: Interval, mode: PlaybackMode, outcome: Outcome) {
        info!(
            "round {}: {interval} ({mode}) -> {outcome:?}",
            self.session.round_number
        );
        self.session.record(RoundRecord {
            interval,
            mode,
            outcome,
        });
    }

    fn game_over(&mut self, events: &[InputEvent]) -> GameState {
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return GameState::Exit,
                InputEvent::KeyDown(_) => {
                    info!("restarting");
                    self.session.reset();
                    self.current = None;
                    return GameState::RoundOver;
                }
            }
        }

        self.session.status = STATUS_GAME_OVER.to_owned();
        GameState::GameOver
    }

    /// What the presentation layer should show right now.
    pub fn display(&self) -> DisplayState {
        let remaining = self.config.time_limit.saturating_sub(self.session.elapsed);
        DisplayState {
            title: TITLE,
            state: self.state,
            score_text: self.session.score_text(),
            remaining_secs: remaining.as_secs_f32(),
            feedback: self.session.feedback.clone(),
            status: self.session.status.clone(),
            round_number: self.session.round_number.min(self.config.max_rounds),
            max_rounds: self.config.max_rounds,
            history: self.session.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{audio::SilentPlayer, clock::ManualClock};

    fn trainer() -> Trainer {
        Trainer::with_generator(
            TrainerConfig::default(),
            Keymap::default(),
            IntervalGenerator::seeded(42),
        )
        .unwrap()
    }

    #[test]
    fn starts_in_round_over() {
        let trainer = trainer();
        assert_eq!(trainer.state(), GameState::RoundOver);
        assert_eq!(trainer.session().round_number, 0);
        assert!(trainer.current_interval().is_none());
    }

    #[test]
    fn first_ticks_reach_guess() {
        let mut trainer = trainer();
        let mut player = SilentPlayer::default();
        let mut input = VecDeque::new();
        let clock = ManualClock::new();
        let mut io = Io {
            player: &mut player,
            input: &mut input,
            clock: &clock,
        };

        assert_eq!(trainer.tick(&[], &mut io).unwrap(), GameState::PlayInterval);
        assert_eq!(trainer.display().status, "Playing interval...");
        assert_eq!(trainer.session().round_number, 1);

        assert_eq!(trainer.tick(&[], &mut io).unwrap(), GameState::Guess);
        assert_eq!(trainer.display().status, "Guess the interval!");
        assert!(trainer.current_interval().is_some());
        assert!(!player.played.is_empty());
    }

    #[test]
    fn display_starts_full() {
        let trainer = trainer();
        let display = trainer.display();
        assert_eq!(display.title, "Interval Ear Training");
        assert_eq!(display.score_text, "0/0");
        assert_eq!(display.time_text(), "Time: 5.00");
    }

    #[test]
    fn exit_is_terminal() {
        let mut trainer = trainer();
        trainer.state = GameState::Exit;
        let mut player = SilentPlayer::default();
        let mut input = VecDeque::new();
        let clock = ManualClock::new();
        let mut io = Io {
            player: &mut player,
            input: &mut input,
            clock: &clock,
        };
        for _ in 0..3 {
            let events = [InputEvent::KeyDown(Key::Char('s'))];
            assert_eq!(trainer.tick(&events, &mut io).unwrap(), GameState::Exit);
        }
        assert!(player.played.is_empty());
    }
}
