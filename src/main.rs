//! Headless driver: builds a world, walks an actor through it on a fixed
//! timestep, keeps chunk geometry current and saves on exit.
#![forbid(unsafe_code)]

mod app;
mod config;
mod logging;
mod timer;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::{App, Script};
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Headless cinder voxel sandbox")]
struct Args {
    /// Config file; missing means defaults
    #[arg(long, default_value = "cinder.toml")]
    config: PathBuf,

    /// Frames to run before shutting down
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated wall time per frame, in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Save file, overriding `[world] save_path`
    #[arg(long)]
    save: Option<PathBuf>,

    /// Start from a freshly generated world even if a save exists
    #[arg(long)]
    no_load: bool,

    /// Hold the forward key
    #[arg(long)]
    walk: bool,

    /// Hold the jump key
    #[arg(long)]
    jump: bool,

    /// Alternate removing and placing the looked-at block every second
    #[arg(long)]
    dig: bool,

    /// Horizontal mouse movement per frame
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    spin: f32,

    /// Seed for actor spawn positions
    #[arg(long)]
    seed: Option<u64>,

    /// Also write debug-level logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let cfg = Config::load_or_default(&args.config)?;
    let save_path = args.save.clone().unwrap_or_else(|| cfg.world.save_path.clone());
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let script = Script {
        walk: args.walk,
        jump: args.jump,
        dig: args.dig,
        spin: args.spin,
    };

    let mut app = App::new(&cfg, script, Some(save_path), !args.no_load, seed);
    app.run(args.frames, Duration::from_millis(args.frame_ms));
    app.shutdown();
    Ok(())
}
