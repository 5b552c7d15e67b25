//! Volley - Shooter minigame entry point
//!
//! Usage:
//!   volley [--config <volley.toml>] [--fullscreen]
//!
//! With no arguments the game runs with its built-in defaults: a 320×180
//! framebuffer scaled ×4 into a 1280×720 window at 60 updates per second.

use anyhow::{Context, Result};
use clap::Parser;
use volley_core::GameConfig;
use volley_game::GameApp;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "volley")]
#[command(about = "A minimal arcade shooter minigame")]
struct Args {
    /// Path to a TOML config overriding resolution, scale, rate, or pacing
    #[arg(long)]
    config: Option<String>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path).context("Failed to load config")?,
        None => GameConfig::default(),
    };

    log::info!(
        "starting {}: {}x{} scaled x{}, {} Hz, pacing {:?}",
        config.title,
        config.logical_width,
        config.logical_height,
        config.scale,
        config.target_fps,
        config.pacing
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GameApp::new(config, args.fullscreen).context("Failed to build game")?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
