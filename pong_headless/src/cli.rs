use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "pong_headless")]
#[command(about = "Runs the Pong engine without a window, replaying scripted key presses", long_about = None)]
pub struct Cli {
    /// JSON game config; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON key script; without one, Space is pressed on the first tick
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 10_000)]
    pub max_ticks: u64,

    /// Milliseconds between ticks when running in real time
    #[arg(long, default_value_t = 20)]
    pub tick_ms: u64,

    /// Pace ticks at --tick-ms instead of running as fast as possible
    #[arg(long, default_value = "false")]
    pub realtime: bool,
}
