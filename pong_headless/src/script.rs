//! Scripted keyboard timeline standing in for a real window's key events

use std::path::Path;

use anyhow::{Context, Result};
use game_core::{InputLatch, Key};
use serde::{Deserialize, Serialize};

/// One key transition, applied just before the given tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub tick: u64,
    pub key: String,
    #[serde(default = "default_down")]
    pub down: bool,
}

fn default_down() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyScript {
    pub events: Vec<KeyEvent>,
}

impl KeyScript {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read key script: {:?}", path))?;
        let mut script: KeyScript = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse key script: {:?}", path))?;
        script.events.sort_by_key(|e| e.tick);
        Ok(script)
    }

    /// Press and release Space so a game starts straight away
    pub fn press_start() -> Self {
        Self {
            events: vec![
                KeyEvent {
                    tick: 0,
                    key: "Space".to_string(),
                    down: true,
                },
                KeyEvent {
                    tick: 1,
                    key: "Space".to_string(),
                    down: false,
                },
            ],
        }
    }

    pub fn last_tick(&self) -> u64 {
        self.events.last().map(|e| e.tick).unwrap_or(0)
    }

    /// Feed every transition scheduled for `tick` into the latch
    pub fn apply(&self, tick: u64, latch: &mut InputLatch) {
        for event in self.events.iter().filter(|e| e.tick == tick) {
            let Some(key) = Key::from_name(&event.key) else {
                log::warn!("Ignoring unknown key {:?} at tick {}", event.key, tick);
                continue;
            };
            if event.down {
                latch.key_down(key);
            } else {
                latch.key_up(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_with_default_down() {
        let script: KeyScript = serde_json::from_str(
            r#"{"events": [{"tick": 3, "key": "w"}, {"tick": 5, "key": "w", "down": false}]}"#,
        )
        .expect("valid script");
        assert!(script.events[0].down);
        assert!(!script.events[1].down);
        assert_eq!(script.last_tick(), 5);
    }

    #[test]
    fn test_apply_feeds_latch() {
        let script = KeyScript::press_start();
        let mut latch = InputLatch::new();

        script.apply(0, &mut latch);
        assert!(latch.sample().request_start);

        script.apply(1, &mut latch);
        assert!(!latch.sample().request_start);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let script = KeyScript {
            events: vec![KeyEvent {
                tick: 0,
                key: "F13".to_string(),
                down: true,
            }],
        };
        let mut latch = InputLatch::new();
        script.apply(0, &mut latch);
        assert_eq!(latch.sample(), game_core::IntentSet::default());
    }
}
