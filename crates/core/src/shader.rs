//! Shader - turns ray results into columns of glyphs
//!
//! A column is split into three bands:
//!
//! ```text
//!   row 0           sky (blank)
//!   ceiling + 1     wall glyph, picked by distance
//!   floor           ...
//!   floor + 1       floor glyph, picked by row
//!   height - 1
//! ```
//!
//! with `ceiling = height/2 - height/distance` and `floor = height - ceiling`.
//! Both glyph choices are banded lookups over ordered tables.

use crate::buffer::GlyphBuffer;
use crate::config::EngineConfig;
use crate::types::{glyph, RayResult, MIN_DISTANCE};

/// One entry of a banded lookup: values under `limit` (or equal, when
/// `inclusive`) map to `glyph`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeBand {
    pub limit: f32,
    pub inclusive: bool,
    pub glyph: char,
}

impl ShadeBand {
    const fn below(limit: f32, glyph: char) -> Self {
        Self {
            limit,
            inclusive: false,
            glyph,
        }
    }

    const fn up_to(limit: f32, glyph: char) -> Self {
        Self {
            limit,
            inclusive: true,
            glyph,
        }
    }

    #[inline]
    fn contains(&self, value: f32) -> bool {
        if self.inclusive {
            value <= self.limit
        } else {
            value < self.limit
        }
    }
}

/// First band containing `value`, or `fallback`.
#[inline]
fn lookup(bands: &[ShadeBand], value: f32, fallback: char) -> char {
    bands
        .iter()
        .find(|b| b.contains(value))
        .map_or(fallback, |b| b.glyph)
}

/// Floor blend thresholds, dense near the viewer to sparse far away.
const FLOOR_BANDS: [ShadeBand; 4] = [
    ShadeBand::below(0.2, glyph::FLOOR_NEAR),
    ShadeBand::below(0.4, glyph::FLOOR_MID_NEAR),
    ShadeBand::below(0.6, glyph::FLOOR_MID),
    ShadeBand::below(0.8, glyph::FLOOR_FAR),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    height: u16,
    wall_bands: [ShadeBand; 4],
}

impl Shader {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_depth(config.screen_height, config.depth)
    }

    pub fn with_depth(height: u16, depth: f32) -> Self {
        Self {
            height,
            wall_bands: [
                ShadeBand::up_to(depth / 4.0, glyph::WALL_SOLID),
                ShadeBand::below(depth / 3.0, glyph::WALL_DARK),
                ShadeBand::below(depth / 2.0, glyph::WALL_MEDIUM),
                ShadeBand::below(depth, glyph::WALL_LIGHT),
            ],
        }
    }

    /// Wall glyph for a hit at `distance`. Boundary seams are blanked.
    pub fn wall_glyph(&self, distance: f32, boundary: bool) -> char {
        if boundary {
            return glyph::BLANK;
        }
        lookup(&self.wall_bands, distance, glyph::BLANK)
    }

    /// Floor glyph for screen row `row` (below the horizon).
    pub fn floor_glyph(&self, row: u16) -> char {
        let half = self.height as f32 / 2.0;
        let blend = 1.0 - ((row as f32 - half) / half);
        lookup(&FLOOR_BANDS, blend, glyph::BLANK)
    }

    /// `(ceiling, floor)` rows for a wall at `distance`.
    ///
    /// Rows `<= ceiling` are sky, rows in `(ceiling, floor]` are wall.
    /// Either value may fall outside the screen for very near walls.
    pub fn wall_span(&self, distance: f32) -> (i32, i32) {
        let h = self.height as f32;
        let ceiling = (h / 2.0 - h / distance.max(MIN_DISTANCE)) as i32;
        (ceiling, self.height as i32 - ceiling)
    }

    /// Fill column `col` of `buf` for one ray.
    pub fn shade_column(&self, buf: &mut GlyphBuffer, col: u16, ray: &RayResult) {
        let (ceiling, floor) = self.wall_span(ray.distance);
        let wall = self.wall_glyph(ray.distance, ray.boundary);

        for row in 0..self.height.min(buf.height()) {
            let r = row as i32;
            let ch = if r <= ceiling {
                glyph::BLANK
            } else if r <= floor {
                wall
            } else {
                self.floor_glyph(row)
            };
            buf.set(col, row, ch);
        }
    }

    /// Shade a whole frame, one column per ray.
    pub fn shade_frame(&self, buf: &mut GlyphBuffer, rays: &[RayResult]) {
        for (col, ray) in rays.iter().enumerate().take(buf.width() as usize) {
            self.shade_column(buf, col as u16, ray);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shader() -> Shader {
        Shader::with_depth(40, 16.0)
    }

    #[test]
    fn test_wall_tiers_follow_distance() {
        let s = shader();
        assert_eq!(s.wall_glyph(1.0, false), glyph::WALL_SOLID);
        assert_eq!(s.wall_glyph(4.0, false), glyph::WALL_SOLID);
        assert_eq!(s.wall_glyph(4.1, false), glyph::WALL_DARK);
        assert_eq!(s.wall_glyph(6.0, false), glyph::WALL_MEDIUM);
        assert_eq!(s.wall_glyph(8.0, false), glyph::WALL_LIGHT);
        assert_eq!(s.wall_glyph(15.9, false), glyph::WALL_LIGHT);
        assert_eq!(s.wall_glyph(16.0, false), glyph::BLANK);
    }

    #[test]
    fn test_boundary_blanks_every_tier() {
        let s = shader();
        for d in [1.0, 5.0, 7.0, 12.0] {
            assert_eq!(s.wall_glyph(d, true), glyph::BLANK);
        }
    }

    #[test]
    fn test_floor_gets_denser_towards_the_bottom() {
        let s = shader();
        // blend = 1 - (row - 20) / 20
        assert_eq!(s.floor_glyph(21), glyph::BLANK); // 0.95
        assert_eq!(s.floor_glyph(25), glyph::FLOOR_FAR); // 0.75
        assert_eq!(s.floor_glyph(29), glyph::FLOOR_MID); // 0.55
        assert_eq!(s.floor_glyph(33), glyph::FLOOR_MID_NEAR); // 0.35
        assert_eq!(s.floor_glyph(39), glyph::FLOOR_NEAR); // 0.05
    }

    #[test]
    fn test_wall_span_is_symmetric_about_the_horizon() {
        let s = shader();
        assert_eq!(s.wall_span(16.0), (17, 23));
        assert_eq!(s.wall_span(4.0), (10, 30));
        // 20 - 40/1 = -20: wall covers the whole column.
        assert_eq!(s.wall_span(1.0), (-20, 60));
    }

    #[test]
    fn test_zero_distance_does_not_blow_up() {
        let s = shader();
        let (ceiling, floor) = s.wall_span(0.0);
        assert!(ceiling < 0);
        assert!(floor > 40);

        let mut buf = GlyphBuffer::new(1, 40);
        let ray = RayResult {
            distance: 0.0,
            boundary: false,
            hit_cell: Some((0, 0)),
        };
        s.shade_column(&mut buf, 0, &ray);
        assert!(buf.column(0).all(|c| c == glyph::WALL_SOLID));
    }

    #[test]
    fn test_column_has_sky_wall_and_floor() {
        let s = shader();
        let mut buf = GlyphBuffer::new(2, 40);
        let ray = RayResult {
            distance: 4.0,
            boundary: false,
            hit_cell: Some((3, 3)),
        };
        s.shade_column(&mut buf, 1, &ray);

        assert_eq!(buf.get(1, 0), Some(glyph::BLANK));
        assert_eq!(buf.get(1, 10), Some(glyph::BLANK));
        assert_eq!(buf.get(1, 11), Some(glyph::WALL_SOLID));
        assert_eq!(buf.get(1, 30), Some(glyph::WALL_SOLID));
        assert_eq!(buf.get(1, 31), Some(s.floor_glyph(31)));
        assert_eq!(buf.get(1, 39), Some(glyph::FLOOR_NEAR));
        // Column 0 untouched.
        assert!(buf.column(0).all(|c| c == glyph::BLANK));
    }
}
