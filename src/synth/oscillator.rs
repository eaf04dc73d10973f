use std::f32::consts::TAU;

/*
Oscillator
==========

A phase accumulator: `phase` runs from 0.0 to 1.0 once per cycle and each
waveform maps it onto -1.0..1.0.

    phase += frequency / sample_rate        (wrapped back into 0..1)

  Sine      sin(2π·phase). Fundamental only; the body of the tone.
  Triangle  Odd harmonics falling off as 1/n². Adds a little edge without
            sounding buzzy.

The trainer's voice layers a sine fundamental with a quiet triangle an
octave up, which reads as "a pitched instrument" without needing samples.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    /// Restart the cycle so every note begins at the same point.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let value = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (self.phase - 0.5).abs(),
        };

        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();
        value
    }
}
