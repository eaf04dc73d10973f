pub mod audio; // Audio player contract and interval playback
pub mod clock;
pub mod config;
pub mod error;
pub mod game; // Round state machine and scoring
pub mod input;
pub mod keymap;
pub mod layout;
pub mod synth; // Tone generator for the terminal player
pub mod theory; // Notes and intervals

pub use config::TrainerConfig;
pub use error::{Error, KeymapError, Result};
pub use game::{GameState, Io, Trainer};

/// Largest block the synth renders in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
