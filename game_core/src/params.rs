/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 4.0; // units per tick
    pub const PADDLE_EDGE: f32 = 20.0; // gap between arena side and paddle

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 4.0; // units per tick on each axis

    // Score
    pub const WIN_SCORE: u32 = 2; // First to 2 wins

    // Palette (RGBA)
    pub const PADDLE_COLOR: [u8; 4] = [255, 255, 255, 255];
    pub const BALL_COLOR: [u8; 4] = [255, 255, 255, 255];

    // RNG
    pub const DEFAULT_SEED: u64 = 12345;
}
