//! Discrete notifications emitted by the engine during a step
//!
//! Sinks are called synchronously from inside `Engine::step` and return
//! nothing, so a sink can never fail the tick. A slow consumer should queue
//! (see the `Sender` impl) rather than block.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Event category, for collaborators that only care about the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    WallBounce,
    PaddleHit,
    Score,
    GameOver,
}

/// An event together with its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball hit the top or bottom wall
    WallBounce { top: bool },
    /// Ball overlapped a paddle
    PaddleHit { side: Side },
    /// Ball left the arena; `scorer` gained a point
    Score { scorer: Side, left: u32, right: u32 },
    /// `winner` reached the win score
    GameOver { winner: Side },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::WallBounce { .. } => EventKind::WallBounce,
            GameEvent::PaddleHit { .. } => EventKind::PaddleHit,
            GameEvent::Score { .. } => EventKind::Score,
            GameEvent::GameOver { .. } => EventKind::GameOver,
        }
    }
}

/// Receiver of engine events (audio cues, UI flashes, logs, ...)
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl EventSink for Sender<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        // Receiver gone means nobody is listening any more
        let _ = self.send(*event);
    }
}
