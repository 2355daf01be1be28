//! Ray caster - one ray per screen column
//!
//! Each ray is marched from the player in fixed increments of `step` world
//! units. At every sample the point is floored to a tile; the march stops on
//! the first wall tile, when the point leaves the map, or once `depth` is
//! reached. The fixed-step march can overshoot a wall face by at most one
//! step, so hit distances carry an error of at most `step`.

use crate::boundary::is_boundary;
use crate::config::EngineConfig;
use crate::map::WorldMap;
use crate::types::{PlayerState, RayResult, Tile};

/// Casts the rays of one frame. Holds no per-frame state.
#[derive(Debug, Clone, PartialEq)]
pub struct RayCaster {
    columns: u16,
    fov: f32,
    depth: f32,
    step: f32,
    boundary_epsilon: f32,
}

impl RayCaster {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            columns: config.screen_width,
            fov: config.fov,
            depth: config.depth,
            step: config.step,
            boundary_epsilon: config.boundary_epsilon,
        }
    }

    /// World-space angle of the ray through screen column `col`.
    #[inline]
    pub fn ray_angle(&self, heading: f32, col: u16) -> f32 {
        (heading - self.fov / 2.0) + (col as f32 / self.columns as f32) * self.fov
    }

    /// Cast every column, left to right.
    pub fn cast(&self, map: &WorldMap, player: &PlayerState) -> Vec<RayResult> {
        let mut out = Vec::with_capacity(self.columns as usize);
        self.cast_into(map, player, &mut out);
        out
    }

    /// Cast every column into a reusable buffer. `out` is cleared first.
    pub fn cast_into(&self, map: &WorldMap, player: &PlayerState, out: &mut Vec<RayResult>) {
        out.clear();
        out.extend((0..self.columns).map(|col| self.cast_column(map, player, col)));
    }

    pub fn cast_column(&self, map: &WorldMap, player: &PlayerState, col: u16) -> RayResult {
        self.cast_ray(map, player, self.ray_angle(player.heading, col))
    }

    /// March a single ray at `angle` from the player's position.
    pub fn cast_ray(&self, map: &WorldMap, player: &PlayerState, angle: f32) -> RayResult {
        let dir = (angle.sin(), angle.cos());
        let mut steps: u32 = 0;
        let mut distance = 0.0f32;

        while distance < self.depth {
            steps += 1;
            distance = steps as f32 * self.step;

            let col = (player.x + dir.0 * distance).floor() as i32;
            let row = (player.y + dir.1 * distance).floor() as i32;

            match map.get(col, row) {
                None => return RayResult::miss(self.depth),
                Some(Tile::Empty) => {}
                Some(Tile::Wall) => {
                    let (col, row) = (col as usize, row as usize);
                    return RayResult {
                        distance: distance.min(self.depth),
                        boundary: is_boundary(
                            player.x,
                            player.y,
                            col,
                            row,
                            dir,
                            self.boundary_epsilon,
                        ),
                        hit_cell: Some((col, row)),
                    };
                }
            }
        }

        RayResult::miss(self.depth)
    }
}
