//! Motion controller - rotation and collision-checked movement.

use crate::config::EngineConfig;
use crate::map::WorldMap;
use crate::types::{Intents, PlayerState, ROTATION_FACTOR};

/// Source of per-frame intent snapshots (keyboard, script, test double).
pub trait InputSampler {
    fn sample(&mut self) -> Intents;
}

impl InputSampler for Intents {
    fn sample(&mut self) -> Intents {
        *self
    }
}

/// Outcome of a movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No movement intent (or both cancelled).
    Idle,
    Moved,
    /// The step would have entered a wall and was reverted.
    Blocked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionController {
    speed: f32,
}

impl MotionController {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_speed(config.speed)
    }

    pub fn with_speed(speed: f32) -> Self {
        Self { speed }
    }

    pub fn rotation_rate(&self) -> f32 {
        self.speed * ROTATION_FACTOR
    }

    /// Apply one frame: rotation first, then movement along the new heading.
    pub fn update(
        &self,
        player: &mut PlayerState,
        map: &WorldMap,
        dt: f32,
        intents: Intents,
    ) -> MoveOutcome {
        self.rotate(player, dt, intents);
        self.advance(player, map, dt, intents)
    }

    /// Like [`MotionController::update`], pulling intents from `sampler`.
    pub fn update_from<S: InputSampler + ?Sized>(
        &self,
        player: &mut PlayerState,
        map: &WorldMap,
        dt: f32,
        sampler: &mut S,
    ) -> MoveOutcome {
        let intents = sampler.sample();
        self.update(player, map, dt, intents)
    }

    /// Left decreases the heading, right increases it; both cancel.
    pub fn rotate(&self, player: &mut PlayerState, dt: f32, intents: Intents) {
        let axis = intents.turn_axis();
        if axis != 0.0 {
            player.heading += axis * self.rotation_rate() * dt;
        }
    }

    /// Step along the facing vector. A step ending in a wall tile (or off the
    /// map) is reverted on both axes.
    pub fn advance(
        &self,
        player: &mut PlayerState,
        map: &WorldMap,
        dt: f32,
        intents: Intents,
    ) -> MoveOutcome {
        let axis = intents.walk_axis();
        if axis == 0.0 {
            return MoveOutcome::Idle;
        }

        let (fx, fy) = player.facing();
        let dist = axis * self.speed * dt;
        let (x, y) = (player.x + fx * dist, player.y + fy * dist);

        if map.blocks(x, y) {
            tracing::trace!(x, y, "step blocked by wall");
            return MoveOutcome::Blocked;
        }

        player.x = x;
        player.y = y;
        MoveOutcome::Moved
    }
}
