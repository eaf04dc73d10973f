//! Error types for the trainer library.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Problems found while validating a key mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("key mapping needs exactly 13 entries, got {0}")]
    WrongLength(usize),

    #[error("semitone {0} is outside 0..=12")]
    SemitoneOutOfRange(u8),

    #[error("key {0:?} is mapped more than once")]
    DuplicateKey(char),

    #[error("semitone {0} is mapped to more than one key")]
    DuplicateSemitone(u8),
}

/// Errors surfaced by the trainer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid key mapping: {0}")]
    Keymap(#[from] KeymapError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to load asset {path:?}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input error: {0}")]
    Input(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
