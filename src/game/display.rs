//! Read-only snapshot handed to the presentation layer every tick.

use super::{session::RoundRecord, GameState};

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub title: &'static str,
    pub state: GameState,
    /// `"correct/attempted"`.
    pub score_text: String,
    /// Seconds left to answer, never negative.
    pub remaining_secs: f32,
    pub feedback: String,
    pub status: String,
    pub round_number: u32,
    pub max_rounds: u32,
    pub history: Vec<RoundRecord>,
}

impl DisplayState {
    /// `"Time: 4.25"`.
    pub fn time_text(&self) -> String {
        format!("Time: {:.2}", self.remaining_secs)
    }
}
