//! Terminal raycaster runner (default binary).
//!
//! Walks a first-person view of a tile map: `W`/`S` (or arrows) move,
//! `A`/`D` turn, `Q`/`Esc` quits.
//!
//! Environment:
//! - `RAYCASTER_MAP_PATH`: map file (`#` walls), defaults to the built-in map
//! - `RAYCASTER_LOG_PATH`: write logs to this file (filter via `RUST_LOG`)
//! - `RAYCASTER_HUD=0` / `RAYCASTER_MINIMAP=0`: hide the overlays
//! - see `EngineConfig::from_env` for the engine tunables

use std::env;
use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_raycaster::core::{EngineConfig, FrameClock, WorldMap};
use tui_raycaster::engine::{run, Engine};
use tui_raycaster::input::{HeldIntents, KeyboardSampler};
use tui_raycaster::term::{ScreenView, TerminalPresenter, TerminalRenderer};
use tui_raycaster::types::StopSignal;

fn main() -> Result<()> {
    init_logging()?;

    let map = match env::var("RAYCASTER_MAP_PATH") {
        Ok(path) if !path.trim().is_empty() => WorldMap::from_file(path.trim())?,
        _ => WorldMap::default(),
    };
    let config = EngineConfig::from_env();
    let mut engine = Engine::new(config, map.clone()).context("invalid engine configuration")?;

    let mut view = ScreenView::new().with_hud(env_flag("RAYCASTER_HUD", true));
    if env_flag("RAYCASTER_MINIMAP", true) {
        view = view.with_minimap(map);
    }

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let stop = StopSignal::new();
    let held = HeldIntents::new().with_release_events(renderer.reports_key_release());
    let mut sampler = KeyboardSampler::new(stop.clone()).with_held(held);
    let mut presenter = TerminalPresenter::new(renderer, view);

    let result = run(
        &mut engine,
        &mut presenter,
        &mut sampler,
        &mut FrameClock::new(),
        &stop,
    );

    // Always try to restore terminal state.
    let _ = presenter.renderer_mut().exit();

    let frames = result?;
    tracing::info!(frames, "exiting");
    Ok(())
}

/// Logs go to a file (stdout is the game display); no file, no logging.
fn init_logging() -> Result<()> {
    let Some(path) = env::var_os("RAYCASTER_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
        .unwrap_or(default)
}
