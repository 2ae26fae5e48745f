use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub win_score: u32,
    pub ball_speed: f32,
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_edge_offset: f32,
    pub ball_size: f32,
    /// Draw the vertical serve direction from the seeded RNG
    pub randomize_serve: bool,
    pub seed: u64,
    pub paddle_color: [u8; 4],
    pub ball_color: [u8; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            win_score: Params::WIN_SCORE,
            ball_speed: Params::BALL_SPEED,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_edge_offset: Params::PADDLE_EDGE,
            ball_size: Params::BALL_SIZE,
            randomize_serve: false,
            seed: Params::DEFAULT_SEED,
            paddle_color: Params::PADDLE_COLOR,
            ball_color: Params::BALL_COLOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every construction invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_speed", self.ball_speed),
            ("paddle_speed", self.paddle_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_edge_offset", self.paddle_edge_offset),
            ("ball_size", self.ball_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }

        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
                arena_width: self.arena_width,
                arena_height: self.arena_height,
            });
        }

        // Left paddle's right edge must stay left of the right paddle's left edge
        if 2.0 * (self.paddle_edge_offset + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::PaddlesOverlap {
                paddle_edge_offset: self.paddle_edge_offset,
                paddle_width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }

        Ok(())
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_edge_offset,
            Side::Right => self.arena_width - self.paddle_edge_offset - self.paddle_width,
        }
    }

    /// Lowest allowed paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }
}
