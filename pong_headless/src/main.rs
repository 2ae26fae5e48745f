mod cli;
mod script;
mod sink;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, Engine, GameState, InputLatch, RenderSnapshot};

use crate::cli::Cli;
use crate::script::KeyScript;
use crate::sink::LogSink;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let script = match &cli.script {
        Some(path) => KeyScript::load(path)?,
        None => KeyScript::press_start(),
    };

    let snapshot = run(&cli, config, &script)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;
    log::info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Tick the engine until quit, a finished game with no more scripted input, or `max_ticks`
fn run(cli: &Cli, config: Config, script: &KeyScript) -> Result<RenderSnapshot> {
    let mut engine = Engine::with_sink(config, Box::new(LogSink::default()))
        .context("Invalid game configuration")?;
    let mut latch = InputLatch::new();
    let interval = Duration::from_millis(cli.tick_ms);
    let mut next_tick = Instant::now();

    log::info!("Pong (headless) starting, max {} ticks", cli.max_ticks);

    for tick in 0..cli.max_ticks {
        script.apply(tick, &mut latch);
        engine.step(&latch.sample());

        if engine.is_terminated() {
            log::info!("Quit at tick {}", tick);
            break;
        }
        if engine.state() == GameState::GameOver && tick >= script.last_tick() {
            break;
        }

        if tick % 500 == 0 {
            let score = engine.score();
            log::debug!(
                "tick={}, state={:?}, score={}-{}",
                tick,
                engine.state(),
                score.left,
                score.right
            );
        }

        if cli.realtime {
            next_tick += interval;
            let now = Instant::now();
            if next_tick > now {
                std::thread::sleep(next_tick - now);
            }
        }
    }

    Ok(engine.snapshot())
}
