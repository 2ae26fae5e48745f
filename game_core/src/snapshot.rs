//! Read-only view of the game for renderers
//!
//! Snapshots are plain owned values, so a renderer on another thread or timer
//! can hold one while the engine keeps stepping.

use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::fsm::GameState;
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub state: GameState,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub ball_moving_right: bool,
    pub ball_moving_down: bool,
    pub paddle_color: [u8; 4],
    pub ball_color: [u8; 4],
    pub score_left: u32,
    pub score_right: u32,
    pub win_score: u32,
    /// Set only in GameOver
    pub winner: Option<Side>,
    /// Set only in GameOver
    pub message: Option<String>,
    pub terminated: bool,
}

impl RenderSnapshot {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }
}

/// Text shown when a game ends
pub fn winner_message(winner: Side) -> String {
    format!("{} Wins!!!\nPlay Again?", winner.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_message() {
        assert_eq!(winner_message(Side::Right), "Player 2 Wins!!!\nPlay Again?");
        assert_eq!(winner_message(Side::Left), "Player 1 Wins!!!\nPlay Again?");
    }
}
