//! Engine: owns the world, the player and the frame buffers.

use crate::core::{
    ConfigError, EngineConfig, GlyphBuffer, MotionController, MoveOutcome, RayCaster, Shader,
    WorldMap,
};
use crate::types::{Intents, PlayerState, RayResult};

/// Weight of the newest sample in the smoothed frame rate.
const FPS_SMOOTHING: f32 = 0.1;

/// Per-frame bookkeeping handed to presenters (HUD, diagnostics).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Number of completed frames.
    pub frame: u64,
    /// Elapsed seconds used for the last frame.
    pub dt: f32,
    /// Exponentially smoothed frames per second.
    pub fps: f32,
    pub player: PlayerState,
    pub last_move: MoveOutcome,
}

impl FrameStats {
    fn new(player: PlayerState) -> Self {
        Self {
            frame: 0,
            dt: 0.0,
            fps: 0.0,
            player,
            last_move: MoveOutcome::Idle,
        }
    }

    fn record(&mut self, dt: f32, player: PlayerState, last_move: MoveOutcome) {
        self.frame += 1;
        self.dt = dt;
        if dt > 0.0 {
            let instant = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant
            } else {
                self.fps + (instant - self.fps) * FPS_SMOOTHING
            };
        }
        self.player = player;
        self.last_move = last_move;
    }
}

pub struct Engine {
    config: EngineConfig,
    map: WorldMap,
    player: PlayerState,
    caster: RayCaster,
    shader: Shader,
    motion: MotionController,
    rays: Vec<RayResult>,
    frame: GlyphBuffer,
    stats: FrameStats,
}

impl Engine {
    /// Validate `config` against `map` and build an engine at the start pose.
    ///
    /// The frame buffer starts blank until the first [`Engine::step`].
    pub fn new(config: EngineConfig, map: WorldMap) -> Result<Self, ConfigError> {
        config.validate(&map)?;
        let player = config.start;
        tracing::info!(
            width = config.screen_width,
            height = config.screen_height,
            map_width = map.width(),
            map_height = map.height(),
            x = player.x,
            y = player.y,
            "engine ready"
        );
        Ok(Self {
            caster: RayCaster::new(&config),
            shader: Shader::new(&config),
            motion: MotionController::new(&config),
            rays: Vec::with_capacity(config.screen_width as usize),
            frame: GlyphBuffer::new(config.screen_width, config.screen_height),
            stats: FrameStats::new(player),
            config,
            map,
            player,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Buffer produced by the most recent [`Engine::render`].
    pub fn frame(&self) -> &GlyphBuffer {
        &self.frame
    }

    /// Ray results of the most recent [`Engine::render`].
    pub fn rays(&self) -> &[RayResult] {
        &self.rays
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Apply rotation then movement for one frame.
    pub fn update(&mut self, dt: f32, intents: Intents) -> MoveOutcome {
        self.motion.update(&mut self.player, &self.map, dt, intents)
    }

    /// Cast all columns and shade them into the frame buffer.
    pub fn render(&mut self) {
        self.caster.cast_into(&self.map, &self.player, &mut self.rays);
        self.shader.shade_frame(&mut self.frame, &self.rays);
    }

    /// One full simulation frame: update the pose, then render.
    pub fn step(&mut self, dt: f32, intents: Intents) -> MoveOutcome {
        let outcome = self.update(dt, intents);
        self.render();
        self.stats.record(dt, self.player, outcome);
        outcome
    }
}
