use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::geometry::Rect;

/// Which side of the arena a paddle or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player name shown to users
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub speed: f32,
}

impl Paddle {
    /// Paddle at its start position: vertically centered at its fixed edge
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            rect: Rect::new(
                config.paddle_x(side),
                config.arena_height / 2.0 - config.paddle_height / 2.0,
                config.paddle_width,
                config.paddle_height,
            ),
            speed: config.paddle_speed,
        }
    }

    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(self.side, config);
    }

    /// Move up one tick unless already at the top edge
    pub fn move_up(&mut self) {
        if self.rect.pos.y > 0.0 {
            self.rect.pos.y = (self.rect.pos.y - self.speed).max(0.0);
        }
    }

    /// Move down one tick unless already at the bottom limit
    pub fn move_down(&mut self, max_y: f32) {
        if self.rect.pos.y < max_y {
            self.rect.pos.y = (self.rect.pos.y + self.speed).min(max_y);
        }
    }
}

/// Ball component - the pong ball
///
/// Direction is two independent flags. Collision rules set them, motion only reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub moving_right: bool,
    pub moving_down: bool,
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &Config, moving_right: bool, moving_down: bool) -> Self {
        Self {
            rect: Self::spawn_rect(config),
            moving_right,
            moving_down,
            speed: config.ball_speed,
        }
    }

    fn spawn_rect(config: &Config) -> Rect {
        Rect::from_center_size(
            Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            Vec2::splat(config.ball_size),
        )
    }

    /// Put the ball back at the arena center with the given serve direction
    pub fn serve(&mut self, config: &Config, moving_right: bool, moving_down: bool) {
        self.rect = Self::spawn_rect(config);
        self.moving_right = moving_right;
        self.moving_down = moving_down;
        self.speed = config.ball_speed;
    }

    /// Unit direction on each axis (+1 right/down, -1 left/up)
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            if self.moving_right { 1.0 } else { -1.0 },
            if self.moving_down { 1.0 } else { -1.0 },
        )
    }
}

/// All simulated entities, owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
}

impl World {
    pub fn new(config: &Config) -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left, config),
            right_paddle: Paddle::new(Side::Right, config),
            ball: Ball::new(config, true, true),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }
}
