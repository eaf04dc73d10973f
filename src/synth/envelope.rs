/*
ADSR Envelope
=============

Shapes each note's loudness over time with straight-line segments.

  level
    1.0 ┐   ╱╲
        │  ╱  ╲______________
    S   │ ╱                  ╲
    0.0 └╱────────────────────╲───→ time
        A   D      S          R
              (gate high)   (gate low)

Stages and what moves between them:

  Idle     ── gate on ──→ Attack
  Attack   ── level reaches 1.0 ──→ Decay
  Decay    ── level reaches S ──→ Sustain
  any      ── gate off ──→ Release (from the current level)
  Release  ── level reaches 0.0 ──→ Idle

Per-sample step for a segment:

    step = distance / (seconds * sample_rate)

Release remembers where it started and counts samples, so it lands on
exactly 0.0 whether the gate dropped during attack, decay or sustain.
*/

/// Shortest stage length, one sample at 48 kHz.
const MIN_TIME: f32 = 1.0 / 48_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack: f32,
    decay: f32,
    sustain: f32,
    release: f32,
    sample_rate: f32,

    stage: Stage,
    level: f32,
    release_from: f32,
    release_len: u32,
    release_pos: u32,
}

impl Envelope {
    /// Times in seconds, `sustain` as a level in 0.0..=1.0.
    pub fn adsr(sample_rate: f32, attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack: attack.max(MIN_TIME),
            decay: decay.max(MIN_TIME),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(MIN_TIME),
            sample_rate,
            stage: Stage::Idle,
            level: 0.0,
            release_from: 0.0,
            release_len: 1,
            release_pos: 0,
        }
    }

    /// Soft piano-like shape: quick attack, falls to a moderate sustain,
    /// short tail.
    pub fn piano(sample_rate: f32) -> Self {
        Self::adsr(sample_rate, 0.005, 0.4, 0.45, 0.12)
    }

    /// Gate high. Always restarts from zero.
    pub fn note_on(&mut self) {
        self.level = 0.0;
        self.release_pos = 0;
        self.stage = Stage::Attack;
    }

    /// Gate low.
    pub fn note_off(&mut self) {
        if self.stage == Stage::Idle {
            return;
        }
        self.release_from = self.level;
        self.release_len = (self.release * self.sample_rate).round().max(1.0) as u32;
        self.release_pos = 0;
        self.stage = Stage::Release;
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        match self.stage {
            Stage::Idle => self.level = 0.0,
            Stage::Attack => {
                self.level += 1.0 / (self.attack * self.sample_rate);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = Stage::Decay;
                }
            }
            Stage::Decay => {
                self.level -= (1.0 - self.sustain) / (self.decay * self.sample_rate);
                if self.level <= self.sustain {
                    self.level = self.sustain;
                    self.stage = Stage::Sustain;
                }
            }
            Stage::Sustain => self.level = self.sustain,
            Stage::Release => {
                self.release_pos = self.release_pos.saturating_add(1);
                let progress = self.release_pos as f32 / self.release_len as f32;
                self.level = (self.release_from * (1.0 - progress)).max(0.0);
                if self.release_pos >= self.release_len {
                    self.level = 0.0;
                    self.stage = Stage::Idle;
                }
            }
        }
        self.level
    }

    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn level(&self) -> f32 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn run(env: &mut Envelope, samples: usize) {
        for _ in 0..samples {
            env.next_sample();
        }
    }

    #[test]
    fn attack_reaches_peak() {
        let mut env = Envelope::adsr(SAMPLE_RATE, 0.01, 0.1, 0.7, 0.2);
        env.note_on();
        run(&mut env, 11);
        assert!(env.level() > 0.99);
        assert_ne!(env.stage(), Stage::Attack);
    }

    #[test]
    fn holds_sustain() {
        let mut env = Envelope::adsr(SAMPLE_RATE, 0.01, 0.05, 0.6, 0.2);
        env.note_on();
        run(&mut env, 70);
        assert_eq!(env.stage(), Stage::Sustain);
        assert!((env.level() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn release_from_attack_ends_idle() {
        let mut env = Envelope::adsr(SAMPLE_RATE, 0.1, 0.05, 0.5, 0.03);
        env.note_on();
        run(&mut env, 20);
        let before = env.level();
        assert!(before > 0.0 && before < 1.0);

        env.note_off();
        assert_eq!(env.stage(), Stage::Release);
        run(&mut env, 30);
        assert_eq!(env.level(), 0.0);
        assert!(!env.is_active());
    }

    #[test]
    fn note_off_while_idle_is_ignored() {
        let mut env = Envelope::piano(SAMPLE_RATE);
        env.note_off();
        assert_eq!(env.stage(), Stage::Idle);
        assert_eq!(env.next_sample(), 0.0);
    }
}
