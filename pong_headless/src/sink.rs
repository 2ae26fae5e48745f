use game_core::{EventSink, GameEvent};

/// Sound cue a real host would play for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Collision,
    Score,
    Fanfare,
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Cue {
        match event {
            GameEvent::WallBounce { .. } | GameEvent::PaddleHit { .. } => Cue::Collision,
            GameEvent::Score { .. } => Cue::Score,
            GameEvent::GameOver { .. } => Cue::Fanfare,
        }
    }
}

/// Logs every event with the cue it maps to
#[derive(Debug, Default)]
pub struct LogSink {
    pub events_seen: u64,
}

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) {
        self.events_seen += 1;
        let cue = Cue::for_event(event);
        match event {
            GameEvent::Score {
                scorer,
                left,
                right,
            } => log::info!("[{:?}] {} scores: {} - {}", cue, scorer.label(), left, right),
            GameEvent::GameOver { winner } => log::info!("[{:?}] {} wins", cue, winner.label()),
            other => log::debug!("[{:?}] {:?}", cue, other),
        }
    }
}
