//! Game State Machine
//!
//! Only a start request leaves Idle or GameOver, and nothing but a win
//! leaves Running. In particular a start request while Running is rejected,
//! so a round can never be reset halfway through.

use serde::{Deserialize, Serialize};

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a start request, nothing moves
    Idle,
    /// Entities advance every tick
    Running,
    /// Someone won; entities frozen until the next start request
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Win,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Idle, GameAction::Start) => Some(GameState::Running),
            (GameState::GameOver, GameAction::Start) => Some(GameState::Running),
            (GameState::Running, GameAction::Win) => Some(GameState::GameOver),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Idle);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Idle);
        assert_eq!(fsm.state(), GameState::Running);
    }

    #[test]
    fn test_start_rejected_while_running() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(!fsm.can_transition(GameAction::Start));
        let result = fsm.transition(GameAction::Start);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Running);
    }

    #[test]
    fn test_win_rejected_when_idle() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Win);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Idle);
    }

    #[test]
    fn test_full_game_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(fsm.is_running());
        fsm.transition(GameAction::Win);
        assert!(fsm.is_game_over());
        fsm.transition(GameAction::Start);
        assert!(fsm.is_running());
    }
}
