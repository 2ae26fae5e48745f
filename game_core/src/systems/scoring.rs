use crate::{Ball, Config, EventSink, GameEvent, Score, Side};

/// Check if ball left the arena; returns the side that scored
pub fn check_exit(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.rect.x() < 0.0 {
        // Past the left edge: right player scores
        Some(Side::Right)
    } else if ball.rect.x() > config.arena_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Credit a point to `scorer`; returns the winner if the game is decided
pub fn award_point(
    score: &mut Score,
    scorer: Side,
    config: &Config,
    events: &mut dyn EventSink,
) -> Option<Side> {
    score.increment(scorer);
    log::debug!(
        "{} scores ({} - {})",
        scorer.label(),
        score.left,
        score.right
    );
    events.on_event(&GameEvent::Score {
        scorer,
        left: score.left,
        right: score.right,
    });
    score.has_winner(config.win_score)
}
