//! Keyboard diagram shown beneath the game text.

use std::{fs, path::Path};

use crate::error::{Error, Result};

/// The diagram, one entry per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    lines: Vec<String>,
}

impl KeyboardLayout {
    /// Load the diagram. A missing file is an error; there is no fallback.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|l| l.trim_end().to_owned()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn width(&self) -> u16 {
        let widest = self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        widest.min(u16::MAX as usize) as u16
    }
}
