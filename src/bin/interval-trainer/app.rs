//! App - wires the trainer to the terminal and the audio device

use std::{thread, time::Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};
use ratatui::DefaultTerminal;
use rtrb::RingBuffer;

use interval_trainer::{
    clock::SystemClock,
    input::InputSource,
    keymap::{Keymap, DEFAULT_KEYS},
    layout::KeyboardLayout,
    synth::{PolySynth, SynthMessage},
    GameState, Io, Trainer, TrainerConfig, MAX_BLOCK_SIZE,
};

use super::{input::TerminalInput, player::SynthPlayer, ui};

/// Voices in the synth pool; an interval needs two.
const MAX_VOICES: usize = 4;
const MESSAGE_QUEUE_SIZE: usize = 64;

/// Application builder
pub struct App {
    config: TrainerConfig,
    /// Answer keys in ascending semitone order, checked in `run`.
    keys: [char; 13],
}

impl App {
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            keys: DEFAULT_KEYS,
        }
    }

    pub fn config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn keys(mut self, keys: [char; 13]) -> Self {
        self.keys = keys;
        self
    }

    fn keymap(&self) -> EyreResult<Keymap> {
        Keymap::from_ascending(self.keys).wrap_err("invalid key mapping")
    }

    /// Set everything up, then run the tick loop until the player quits.
    pub fn run(self) -> EyreResult<()> {
        self.config.validate()?;
        let keymap = self.keymap()?;
        let layout = KeyboardLayout::load(&self.config.keyboard_layout)
            .wrap_err("failed to load keyboard diagram")?;

        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;
        info!(
            "audio device {:?}: {sample_rate} Hz, {channels} channels",
            device.name().unwrap_or_default()
        );

        let (tx, rx) = RingBuffer::<SynthMessage>::new(MESSAGE_QUEUE_SIZE);
        let mut synth = PolySynth::new(sample_rate, MAX_VOICES, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        synth.render_block(block);

                        // Mono to every channel
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        frames_written += frames_to_render;
                    }
                },
                |err| error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        let mut player = SynthPlayer::new(tx, self.config.velocity);
        let mut trainer = Trainer::new(self.config, keymap)?;

        let mut terminal = ratatui::init();
        let res = run_loop(&mut terminal, &mut trainer, &mut player, &layout);
        ratatui::restore();

        info!("exiting with score {}", trainer.session().score_text());
        res
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate loop: poll input, one transition, draw, sleep out the frame.
fn run_loop(
    terminal: &mut DefaultTerminal,
    trainer: &mut Trainer,
    player: &mut SynthPlayer,
    layout: &KeyboardLayout,
) -> EyreResult<()> {
    let frame_time = trainer.config().tick_interval();
    let clock = SystemClock;
    let mut input = TerminalInput;

    loop {
        let frame_start = Instant::now();

        let events = input.poll_events().wrap_err("failed to read terminal input")?;
        let mut io = Io {
            player: &mut *player,
            input: &mut input,
            clock: &clock,
        };
        if trainer.tick(&events, &mut io)? == GameState::Exit {
            return Ok(());
        }

        let display = trainer.display();
        terminal.draw(|frame| ui::render(frame, &display, layout, trainer.keymap()))?;

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_valid() {
        assert_eq!(App::new().keymap().unwrap(), Keymap::default());
    }

    #[test]
    fn reused_key_is_rejected_before_startup() {
        let mut keys = DEFAULT_KEYS;
        keys[12] = 's';
        let err = App::new().keys(keys).keymap().unwrap_err();
        assert!(err.to_string().contains("invalid key mapping"));
    }
}
