//! Player input as sampled once per tick
//!
//! Paddle movement is level-triggered: it stays active while the key is held.
//! Start and quit are edge-triggered one-shots: a press is latched once and
//! cleared when the host samples it, so holding or auto-repeating the key
//! cannot restart a game twice.

use serde::{Deserialize, Serialize};

/// Intents consumed by `Engine::step`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSet {
    pub move_up1: bool,
    pub move_down1: bool,
    pub move_up2: bool,
    pub move_down2: bool,
    pub request_start: bool,
    pub request_quit: bool,
}

impl IntentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start() -> Self {
        Self {
            request_start: true,
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            request_quit: true,
            ..Self::default()
        }
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Y,
    Space,
    Escape,
}

impl Key {
    /// Parse a host key name (DOM `KeyboardEvent.key` style or a plain name)
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "ArrowUp" | "Up" | "up" => Some(Key::Up),
            "ArrowDown" | "Down" | "down" => Some(Key::Down),
            "y" | "Y" => Some(Key::Y),
            " " | "Space" | "space" => Some(Key::Space),
            "Escape" | "Esc" | "escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Accumulates key transitions between ticks
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    w_down: bool,
    s_down: bool,
    up_down: bool,
    down_down: bool,
    start_held: bool,
    quit_held: bool,
    start_pending: bool,
    quit_pending: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::W => self.w_down = true,
            Key::S => self.s_down = true,
            Key::Up => self.up_down = true,
            Key::Down => self.down_down = true,
            Key::Y | Key::Space => {
                if !self.start_held {
                    self.start_pending = true;
                }
                self.start_held = true;
            }
            Key::Escape => {
                if !self.quit_held {
                    self.quit_pending = true;
                }
                self.quit_held = true;
            }
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::W => self.w_down = false,
            Key::S => self.s_down = false,
            Key::Up => self.up_down = false,
            Key::Down => self.down_down = false,
            Key::Y | Key::Space => self.start_held = false,
            Key::Escape => self.quit_held = false,
        }
    }

    /// Current intents; consumes pending start/quit presses
    pub fn sample(&mut self) -> IntentSet {
        let intents = self.peek();
        self.start_pending = false;
        self.quit_pending = false;
        intents
    }

    /// Current intents without consuming anything
    pub fn peek(&self) -> IntentSet {
        IntentSet {
            move_up1: self.w_down,
            move_down1: self.s_down,
            move_up2: self.up_down,
            move_down2: self.down_down,
            request_start: self.start_pending,
            request_quit: self.quit_pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("W"), Some(Key::W));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut latch = InputLatch::new();
        latch.key_down(Key::W);
        latch.key_down(Key::Down);

        for _ in 0..3 {
            let intents = latch.sample();
            assert!(intents.move_up1, "Held key stays active across samples");
            assert!(intents.move_down2);
            assert!(!intents.move_down1);
        }

        latch.key_up(Key::W);
        assert!(!latch.sample().move_up1);
    }

    #[test]
    fn test_start_is_consumed_once() {
        let mut latch = InputLatch::new();
        latch.key_down(Key::Space);
        assert!(latch.sample().request_start);
        assert!(!latch.sample().request_start, "One-shot is cleared after sampling");
    }

    #[test]
    fn test_start_auto_repeat_does_not_retrigger() {
        let mut latch = InputLatch::new();
        latch.key_down(Key::Y);
        assert!(latch.sample().request_start);

        // OS auto-repeat sends more key downs while held
        latch.key_down(Key::Y);
        latch.key_down(Key::Y);
        assert!(!latch.sample().request_start);

        latch.key_up(Key::Y);
        latch.key_down(Key::Y);
        assert!(latch.sample().request_start, "A fresh press triggers again");
    }

    #[test]
    fn test_press_and_release_between_ticks_still_counts() {
        let mut latch = InputLatch::new();
        latch.key_down(Key::Escape);
        latch.key_up(Key::Escape);
        assert!(latch.sample().request_quit);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut latch = InputLatch::new();
        latch.key_down(Key::Space);
        assert!(latch.peek().request_start);
        assert!(latch.sample().request_start);
    }
}
