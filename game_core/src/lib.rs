//! Deterministic two-player Pong simulation
//!
//! The host owns the window, keyboard, renderer and audio. Each tick it
//! samples an [`IntentSet`], calls [`Engine::step`], plays whatever
//! [`GameEvent`]s its [`EventSink`] received, and draws [`Engine::snapshot`].

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod intent;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use fsm::*;
pub use geometry::*;
pub use intent::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
