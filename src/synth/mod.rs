// Purpose: the tone generator behind the audio player.
// Realtime-safe pieces that turn note on/off messages into samples.

pub mod envelope;
pub mod message;
pub mod oscillator;
pub mod poly;
pub mod voice;

pub use message::{MessageReceiver, SynthMessage};
pub use poly::PolySynth;
