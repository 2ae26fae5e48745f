use crate::{Ball, Config, EventSink, GameEvent, Side, World};

/// Bounce the ball off the top or bottom wall
///
/// The vertical flag is set from the wall that was crossed, never toggled, so
/// a ball sitting on the boundary for several ticks keeps a stable direction.
pub fn check_wall_collision(ball: &mut Ball, config: &Config, events: &mut dyn EventSink) -> bool {
    if ball.rect.top() < 0.0 {
        log::trace!("wall bounce (top) at {:?}", ball.rect.pos);
        events.on_event(&GameEvent::WallBounce { top: true });
        ball.moving_down = true;
        true
    } else if ball.rect.bottom() >= config.arena_height {
        log::trace!("wall bounce (bottom) at {:?}", ball.rect.pos);
        events.on_event(&GameEvent::WallBounce { top: false });
        ball.moving_down = false;
        true
    } else {
        false
    }
}

/// Send the ball away from any paddle it overlaps
///
/// Direction is set from which paddle was hit. Toggling instead makes the ball
/// oscillate when it clips a paddle's top or bottom edge over several ticks.
pub fn check_paddle_collisions(world: &mut World, events: &mut dyn EventSink) -> bool {
    let mut hit = false;
    for side in [Side::Left, Side::Right] {
        let paddle = world.paddle(side).rect;
        if world.ball.rect.intersects(&paddle) {
            log::trace!("paddle hit ({:?}) at {:?}", side, world.ball.rect.pos);
            events.on_event(&GameEvent::PaddleHit { side });
            world.ball.moving_right = side == Side::Left;
            hit = true;
        }
    }
    hit
}
