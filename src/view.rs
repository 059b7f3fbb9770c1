//! Frame projection
//!
//! What gets drawn is a pure function of the game state: two boxes and a
//! couple of text overlays. Platforms take a `Frame` and put it on screen.

use crate::sim::{Aabb, GameState};

/// Overlay text shown when the run has ended
pub const GAME_OVER_TEXT: &str = "Game Over!";
/// Label of the restart control
pub const RESTART_LABEL: &str = "Restart";

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub player: Aabb,
    pub obstacle: Aabb,
    /// Always-visible score overlay
    pub score_text: String,
    /// Whether the game-over overlay and restart control are visible
    pub game_over: bool,
    pub ticks: u64,
}

impl Frame {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player: state.player().bounds(),
            obstacle: state.obstacle().bounds(),
            score_text: score_text(state.score()),
            game_over: state.is_game_over(),
            ticks: state.time_ticks(),
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}
