//! Fixed-rate simulation engine
//!
//! The host calls `step` once per tick. Each Running tick applies, in order:
//! ball motion, paddle motion, wall bounce, paddle hit, exit/scoring. A ball
//! that clips a corner can bounce off a wall and score in the same tick; both
//! are processed in that order.

use crate::fsm::{GameAction, GameFsm, GameState};
use crate::snapshot::{winner_message, RenderSnapshot};
use crate::systems::*;
use crate::{Config, ConfigError, EventSink, GameEvent, GameRng, IntentSet, NullSink, Score, Side, World};

pub struct Engine {
    config: Config,
    world: World,
    score: Score,
    fsm: GameFsm,
    rng: GameRng,
    sink: Box<dyn EventSink + Send>,
    winner: Option<Side>,
    terminated: bool,
    tick: u64,
    snapshot: RenderSnapshot,
}

impl Engine {
    /// Engine with no event consumer
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_sink(config, Box::new(NullSink))
    }

    pub fn with_sink(config: Config, sink: Box<dyn EventSink + Send>) -> Result<Self, ConfigError> {
        config.validate()?;

        let world = World::new(&config);
        let rng = GameRng::new(config.seed);
        let fsm = GameFsm::new();
        let score = Score::new();
        let snapshot = build_snapshot(&config, &world, &score, fsm.state(), None, false, 0);

        log::debug!(
            "engine ready: {}x{} arena, first to {}",
            config.arena_width,
            config.arena_height,
            config.win_score
        );

        Ok(Self {
            config,
            world,
            score,
            fsm,
            rng,
            sink,
            winner: None,
            terminated: false,
            tick: 0,
            snapshot,
        })
    }

    /// Replace the event consumer
    pub fn set_sink(&mut self, sink: Box<dyn EventSink + Send>) {
        self.sink = sink;
    }

    /// Advance one tick
    pub fn step(&mut self, intents: &IntentSet) {
        if self.terminated {
            return;
        }

        if intents.request_quit {
            log::info!("quit requested while {:?}", self.fsm.state());
            self.terminated = true;
            self.refresh_snapshot();
            return;
        }

        // The tick that starts a game only lays out the serve
        if intents.request_start && self.start_game() {
            self.refresh_snapshot();
            return;
        }

        if self.fsm.is_running() {
            self.run_tick(intents);
        }

        self.refresh_snapshot();
    }

    /// Copy of the state as of the end of the last step
    pub fn snapshot(&self) -> RenderSnapshot {
        self.snapshot.clone()
    }

    /// Change the arena bounds between ticks
    ///
    /// Paddles are re-anchored to the new edges and clamped into the new
    /// height. On error nothing changes.
    pub fn resize(&mut self, arena_width: f32, arena_height: f32) -> Result<(), ConfigError> {
        let config = Config {
            arena_width,
            arena_height,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;

        if self.fsm.state() == GameState::Idle {
            let (moving_right, moving_down) = (self.world.ball.moving_right, self.world.ball.moving_down);
            reset_layout(&mut self.world, &self.config, moving_right, moving_down);
        } else {
            for side in [Side::Left, Side::Right] {
                let x = self.config.paddle_x(side);
                let paddle = self.world.paddle_mut(side);
                paddle.rect.pos.x = x;
                paddle.rect.pos.y = self.config.clamp_paddle_y(paddle.rect.pos.y);
            }
        }

        log::debug!("arena resized to {}x{}", arena_width, arena_height);
        self.refresh_snapshot();
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Running ticks executed in the current game
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct entity access for tests and tooling; the snapshot refreshes on the next step
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Idle/GameOver -> Running. Returns false if a game is already running.
    fn start_game(&mut self) -> bool {
        let result = self.fsm.transition(GameAction::Start);
        if !result.success {
            log::warn!("start request ignored while {:?}", result.from_state);
            return false;
        }

        self.score.reset();
        self.winner = None;
        self.tick = 0;
        let (moving_right, moving_down) = opening_serve(&self.config, &mut self.rng);
        reset_layout(&mut self.world, &self.config, moving_right, moving_down);

        log::info!("game started (first to {})", self.config.win_score);
        true
    }

    fn run_tick(&mut self, intents: &IntentSet) {
        debug_assert!(
            self.config.arena_width > 0.0 && self.config.arena_height > 0.0,
            "arena bounds must stay positive"
        );
        self.tick += 1;

        // 1. Move ball
        move_ball(&mut self.world.ball);

        // 2. Move paddles based on intents
        move_paddles(&mut self.world, intents, &self.config);

        // 3. Top/bottom walls
        check_wall_collision(&mut self.world.ball, &self.config, &mut *self.sink);

        // 4. Paddles
        check_paddle_collisions(&mut self.world, &mut *self.sink);

        // 5. Check scoring (ball exited arena)
        if let Some(scorer) = check_exit(&self.world.ball, &self.config) {
            match award_point(&mut self.score, scorer, &self.config, &mut *self.sink) {
                Some(winner) => self.finish_game(winner),
                None => self.next_round(),
            }
        }
    }

    fn next_round(&mut self) {
        let (moving_right, moving_down) = next_serve(&self.world, &self.config, &mut self.rng);
        reset_layout(&mut self.world, &self.config, moving_right, moving_down);
        log::debug!(
            "new round: serving {}",
            if moving_right { "right" } else { "left" }
        );
    }

    fn finish_game(&mut self, winner: Side) {
        let result = self.fsm.transition(GameAction::Win);
        debug_assert!(result.success, "win outside of a running game");
        self.winner = Some(winner);
        self.sink.on_event(&GameEvent::GameOver { winner });
        log::info!(
            "{} wins {} - {} after {} ticks",
            winner.label(),
            self.score.left,
            self.score.right,
            self.tick
        );
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot = build_snapshot(
            &self.config,
            &self.world,
            &self.score,
            self.fsm.state(),
            self.winner,
            self.terminated,
            self.tick,
        );
    }
}

fn build_snapshot(
    config: &Config,
    world: &World,
    score: &Score,
    state: GameState,
    winner: Option<Side>,
    terminated: bool,
    tick: u64,
) -> RenderSnapshot {
    let winner = winner.filter(|_| state == GameState::GameOver);
    RenderSnapshot {
        tick,
        state,
        left_paddle: world.left_paddle.rect,
        right_paddle: world.right_paddle.rect,
        ball: world.ball.rect,
        ball_moving_right: world.ball.moving_right,
        ball_moving_down: world.ball.moving_down,
        paddle_color: config.paddle_color,
        ball_color: config.ball_color,
        score_left: score.left,
        score_right: score.right,
        win_score: config.win_score,
        winner,
        message: winner.map(winner_message),
        terminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{channel, Receiver};

    fn engine_with_events(config: Config) -> (Engine, Receiver<GameEvent>) {
        let (tx, rx) = channel();
        let engine = Engine::with_sink(config, Box::new(tx)).expect("valid config");
        (engine, rx)
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            paddle_width: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(ConfigError::NonPositive {
                field: "paddle_width",
                ..
            })
        ));
    }

    #[test]
    fn test_idle_engine_does_not_move() {
        let mut engine = Engine::new(Config::new()).unwrap();
        let before = engine.world().clone();
        let intents = IntentSet {
            move_up1: true,
            move_down2: true,
            ..Default::default()
        };

        for _ in 0..10 {
            engine.step(&intents);
        }

        assert_eq!(engine.state(), GameState::Idle);
        assert_eq!(engine.world(), &before);
        assert_eq!(engine.tick(), 0);
    }

    #[test]
    fn test_start_lays_out_without_moving() {
        let mut engine = Engine::new(Config::new()).unwrap();
        engine.step(&IntentSet::start());

        assert_eq!(engine.state(), GameState::Running);
        assert_eq!(engine.world(), &World::new(engine.config()));
        assert_eq!(engine.tick(), 0);

        engine.step(&IntentSet::new());
        assert_eq!(engine.tick(), 1);
        assert_eq!(engine.world().ball.rect.pos, glam::Vec2::new(294.0, 194.0));
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut engine = Engine::new(Config::new()).unwrap();
        engine.step(&IntentSet::start());
        engine.step(&IntentSet::new());
        engine.step(&IntentSet::new());
        let ball_before = engine.world().ball.rect.pos;

        engine.step(&IntentSet::start());

        assert_eq!(engine.state(), GameState::Running);
        assert_eq!(engine.tick(), 3, "The tick still runs");
        assert_eq!(
            engine.world().ball.rect.pos,
            ball_before + glam::Vec2::new(4.0, 4.0),
            "No reset mid-round"
        );
    }

    #[test]
    fn test_quit_stops_everything() {
        let mut engine = Engine::new(Config::new()).unwrap();
        engine.step(&IntentSet::start());
        engine.step(&IntentSet::new());
        engine.step(&IntentSet::quit());
        let frozen = engine.world().clone();

        engine.step(&IntentSet::new());
        engine.step(&IntentSet::start());

        assert!(engine.is_terminated());
        assert!(engine.snapshot().terminated);
        assert_eq!(engine.world(), &frozen);
        assert_eq!(engine.tick(), 1);
    }

    #[test]
    fn test_game_over_emits_event_and_freezes() {
        let config = Config {
            win_score: 1,
            ..Config::default()
        };
        let (mut engine, rx) = engine_with_events(config);
        engine.step(&IntentSet::start());
        engine.world_mut().ball.rect.pos.x = 1.0;
        engine.world_mut().ball.rect.pos.y = 100.0;
        engine.world_mut().ball.moving_right = false;

        engine.step(&IntentSet::new());

        assert_eq!(engine.state(), GameState::GameOver);
        assert_eq!(engine.winner(), Some(Side::Right));
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Score {
                    scorer: Side::Right,
                    left: 0,
                    right: 1
                },
                GameEvent::GameOver { winner: Side::Right },
            ]
        );

        let frozen = engine.world().clone();
        engine.step(&IntentSet {
            move_up1: true,
            ..Default::default()
        });
        assert_eq!(engine.world(), &frozen);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.winner, Some(Side::Right));
        assert_eq!(snapshot.message.as_deref(), Some("Player 2 Wins!!!\nPlay Again?"));
    }

    #[test]
    fn test_restart_after_game_over_resets_score() {
        let config = Config {
            win_score: 1,
            ..Config::default()
        };
        let mut engine = Engine::new(config).unwrap();
        engine.step(&IntentSet::start());
        engine.world_mut().ball.rect.pos.x = engine.config().arena_width - 1.0;
        engine.world_mut().ball.rect.pos.y = 100.0;
        engine.step(&IntentSet::new());
        assert_eq!(engine.state(), GameState::GameOver);
        assert_eq!(engine.score().left, 1);

        engine.step(&IntentSet::start());

        assert_eq!(engine.state(), GameState::Running);
        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.snapshot().message, None);
        assert_eq!(engine.world(), &World::new(engine.config()));
    }

    #[test]
    fn test_resize_reanchors_paddles() {
        let mut engine = Engine::new(Config::new()).unwrap();
        engine.step(&IntentSet::start());
        engine.world_mut().right_paddle.rect.pos.y = 350.0;

        engine.resize(800.0, 300.0).unwrap();

        let right = engine.world().right_paddle.rect;
        assert_eq!(right.x(), 800.0 - 20.0 - 10.0);
        assert_eq!(right.y(), 260.0, "Clamped into the shorter arena");
        assert_eq!(engine.snapshot().right_paddle, right);
    }

    #[test]
    fn test_invalid_resize_changes_nothing() {
        let mut engine = Engine::new(Config::new()).unwrap();
        let before = engine.config().clone();

        assert!(matches!(
            engine.resize(50.0, 400.0),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
        assert_eq!(engine.config(), &before);
    }

    #[test]
    fn test_snapshot_reflects_last_step() {
        let mut engine = Engine::new(Config::new()).unwrap();
        let idle = engine.snapshot();
        assert_eq!(idle.state, GameState::Idle);
        assert_eq!(idle.winner, None);

        engine.step(&IntentSet::start());
        engine.step(&IntentSet::new());

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.state, GameState::Running);
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.ball, engine.world().ball.rect);
        assert!(snapshot.ball_moving_right);
        assert_eq!(snapshot.paddle_color, [255, 255, 255, 255]);
    }
}
