use thiserror::Error;

/// Invalid engine construction or resize parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("win score must be at least 1")]
    ZeroWinScore,

    #[error("paddle height {paddle_height} does not fit in arena height {arena_height}")]
    PaddleTooTall {
        paddle_height: f32,
        arena_height: f32,
    },

    #[error("ball size {ball_size} does not fit in a {arena_width}x{arena_height} arena")]
    BallTooLarge {
        ball_size: f32,
        arena_width: f32,
        arena_height: f32,
    },

    #[error(
        "paddles overlap: edge offset {paddle_edge_offset} + width {paddle_width} on both sides exceeds arena width {arena_width}"
    )]
    PaddlesOverlap {
        paddle_edge_offset: f32,
        paddle_width: f32,
        arena_width: f32,
    },
}
