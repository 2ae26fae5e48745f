use crate::{Ball, Config, IntentSet, Paddle, World};

/// Move ball one step along its direction flags
pub fn move_ball(ball: &mut Ball) {
    ball.rect.pos += ball.direction() * ball.speed;
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, intents: &IntentSet, config: &Config) {
    let max_y = config.max_paddle_y();
    apply_intent(&mut world.left_paddle, intents.move_up1, intents.move_down1, max_y);
    apply_intent(&mut world.right_paddle, intents.move_up2, intents.move_down2, max_y);
}

fn apply_intent(paddle: &mut Paddle, up: bool, down: bool, max_y: f32) {
    if up {
        paddle.move_up();
    }
    if down {
        paddle.move_down(max_y);
    }
    debug_assert!(
        paddle.rect.y() >= 0.0 && paddle.rect.y() <= max_y,
        "paddle left the arena: y = {}",
        paddle.rect.y()
    );
}
