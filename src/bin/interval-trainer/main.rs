//! interval-trainer - terminal ear-training game
//!
//! Run with: cargo run
//!
//! Listen to two notes, press the key for the interval between them.
//! Logs go to `interval-trainer.log` in the system temp directory;
//! set `RUST_LOG` to change the level.

mod app;
mod input;
mod player;
mod ui;

use std::fs::File;

use app::App;
use color_eyre::eyre::WrapErr;
use interval_trainer::{keymap::DEFAULT_KEYS, TrainerConfig};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    App::new()
        .config(TrainerConfig::default())
        .keys(DEFAULT_KEYS)
        .run()
}

/// The terminal belongs to the UI, so the log goes to a file.
fn init_logging() -> color_eyre::Result<()> {
    let path = std::env::temp_dir().join("interval-trainer.log");
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
