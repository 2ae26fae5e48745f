use crate::{Config, GameRng, World};

/// Direction of the opening serve of a fresh game
pub const OPENING_SERVE: (bool, bool) = (true, true);

/// Put paddles and ball back in the start layout with the given serve direction
pub fn reset_layout(world: &mut World, config: &Config, moving_right: bool, moving_down: bool) {
    world.left_paddle.reset(config);
    world.right_paddle.reset(config);
    world.ball.serve(config, moving_right, moving_down);
}

/// Serve direction for the next round after a point
///
/// The horizontal flag flips; the vertical one is kept unless the config asks
/// for a random vertical serve.
pub fn next_serve(world: &World, config: &Config, rng: &mut GameRng) -> (bool, bool) {
    let moving_right = !world.ball.moving_right;
    let moving_down = if config.randomize_serve {
        rng.coin_flip()
    } else {
        world.ball.moving_down
    };
    (moving_right, moving_down)
}

/// Serve direction for a fresh game
pub fn opening_serve(config: &Config, rng: &mut GameRng) -> (bool, bool) {
    let (moving_right, moving_down) = OPENING_SERVE;
    if config.randomize_serve {
        (moving_right, rng.coin_flip())
    } else {
        (moving_right, moving_down)
    }
}
