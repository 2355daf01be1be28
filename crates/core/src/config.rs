//! Engine configuration, fixed at startup.

use std::env;

use thiserror::Error;

use crate::map::{MapError, WorldMap};
use crate::types::{
    PlayerState, BOUNDARY_EPSILON, FOV, MAX_DEPTH, MOVE_SPEED, RAY_STEP, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Errors raised when a configuration cannot drive the engine.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("screen must be at least 1x2 cells, got {width}x{height}")]
    InvalidScreen { width: u16, height: u16 },

    #[error("field of view must be in (0, 2*pi), got {0}")]
    InvalidFov(f32),

    #[error("render depth must be positive, got {0}")]
    InvalidDepth(f32),

    #[error("movement speed must be non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("ray step must be in (0, depth], got {0}")]
    InvalidStep(f32),

    #[error("start position ({x}, {y}) is outside the {width}x{height} map")]
    StartOutOfBounds {
        x: f32,
        y: f32,
        width: usize,
        height: usize,
    },

    #[error("start position ({x}, {y}) is inside a wall")]
    StartInsideWall { x: f32, y: f32 },

    #[error(transparent)]
    Map(#[from] MapError),
}

/// All tunables of the caster, shader and motion controller.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Horizontal field of view (radians).
    pub fov: f32,
    /// Maximum ray travel (world units).
    pub depth: f32,
    /// Walking speed (world units per second).
    pub speed: f32,
    /// Ray march increment (world units).
    pub step: f32,
    /// Corner alignment threshold (radians).
    pub boundary_epsilon: f32,
    pub start: PlayerState,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fov: FOV,
            depth: MAX_DEPTH,
            speed: MOVE_SPEED,
            step: RAY_STEP,
            boundary_epsilon: BOUNDARY_EPSILON,
            start: PlayerState::default(),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables, falling back to defaults per field.
    ///
    /// - `RAYCASTER_SCREEN_WIDTH`, `RAYCASTER_SCREEN_HEIGHT`
    /// - `RAYCASTER_FOV` (radians), `RAYCASTER_DEPTH`, `RAYCASTER_SPEED`, `RAYCASTER_STEP`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            screen_width: env_parse("RAYCASTER_SCREEN_WIDTH").unwrap_or(defaults.screen_width),
            screen_height: env_parse("RAYCASTER_SCREEN_HEIGHT").unwrap_or(defaults.screen_height),
            fov: env_parse("RAYCASTER_FOV").unwrap_or(defaults.fov),
            depth: env_parse("RAYCASTER_DEPTH").unwrap_or(defaults.depth),
            speed: env_parse("RAYCASTER_SPEED").unwrap_or(defaults.speed),
            step: env_parse("RAYCASTER_STEP").unwrap_or(defaults.step),
            ..defaults
        };
        tracing::debug!(?config, "engine config from environment");
        config
    }

    pub fn with_screen(mut self, width: u16, height: u16) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_start(mut self, start: PlayerState) -> Self {
        self.start = start;
        self
    }

    /// Check numeric ranges and that the start pose is on open floor of `map`.
    pub fn validate(&self, map: &WorldMap) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height < 2 {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::TAU) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if !(self.depth > 0.0 && self.depth.is_finite()) {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        if !(self.speed >= 0.0 && self.speed.is_finite()) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(self.step > 0.0 && self.step <= self.depth) {
            return Err(ConfigError::InvalidStep(self.step));
        }

        let (x, y) = (self.start.x, self.start.y);
        let (col, row) = self.start.cell();
        match map.get(col, row) {
            None => Err(ConfigError::StartOutOfBounds {
                x,
                y,
                width: map.width(),
                height: map.height(),
            }),
            Some(tile) if tile.is_wall() => Err(ConfigError::StartInsideWall { x, y }),
            Some(_) => Ok(()),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
