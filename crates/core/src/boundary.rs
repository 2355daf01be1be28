//! Tile boundary detection.
//!
//! To emphasize seams between adjacent wall tiles, the hit tile's corners are
//! compared against the cast ray. When the ray points (almost) straight at one
//! of the visible corners, the column is on a tile edge and gets shaded as a
//! dark seam.

/// Whether the ray `dir` cast from `(px, py)` grazes a corner of tile `(col, row)`.
///
/// `dir` must be a unit vector. Only the three corners nearest to the viewer are
/// tested; the farthest one is never visible through the tile.
pub fn is_boundary(px: f32, py: f32, col: usize, row: usize, dir: (f32, f32), epsilon: f32) -> bool {
    let (ex, ey) = dir;

    // (distance from viewer, cosine between corner ray and cast ray)
    let mut corners = [(0.0f32, 0.0f32); 4];
    for (i, (dx, dy)) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
        let vx = (col + dx) as f32 - px;
        let vy = (row + dy) as f32 - py;
        let d = (vx * vx + vy * vy).sqrt();
        let cos = if d > f32::EPSILON {
            (ex * vx + ey * vy) / d
        } else {
            // Standing on the corner itself.
            1.0
        };
        corners[i] = (d, cos);
    }

    corners.sort_by(|a, b| a.0.total_cmp(&b.0));

    corners
        .iter()
        .take(3)
        .any(|&(_, cos)| cos.clamp(-1.0, 1.0).acos() < epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOUNDARY_EPSILON;

    fn unit(x: f32, y: f32) -> (f32, f32) {
        let len = (x * x + y * y).sqrt();
        (x / len, y / len)
    }

    #[test]
    fn test_ray_at_corner_is_boundary() {
        // Viewer at (2,2) looking at corner (5,5) of tile (5,5).
        assert!(is_boundary(2.0, 2.0, 5, 5, unit(3.0, 3.0), BOUNDARY_EPSILON));
        // Corner (6,5) of the same tile.
        assert!(is_boundary(2.0, 2.0, 5, 5, unit(4.0, 3.0), BOUNDARY_EPSILON));
    }

    #[test]
    fn test_ray_at_face_centre_is_not_boundary() {
        // Tile (2,6) straight ahead along +y, ray through the middle of its face.
        assert!(!is_boundary(2.5, 2.5, 2, 6, (0.0, 1.0), BOUNDARY_EPSILON));
    }

    #[test]
    fn test_farthest_corner_is_ignored() {
        // (1,1) is the far corner of tile (0,0) seen from (-2.0, -0.5); aiming at
        // it exactly must not count.
        let dir = unit(1.0 - -2.0, 1.0 - -0.5);
        assert!(!is_boundary(-2.0, -0.5, 0, 0, dir, BOUNDARY_EPSILON));
    }

    #[test]
    fn test_round_off_above_one_does_not_produce_nan() {
        // A direction slightly longer than unit length pushes the cosine past 1.0.
        let (x, y) = unit(3.0, 3.0);
        assert!(is_boundary(2.0, 2.0, 5, 5, (x * 1.0001, y * 1.0001), BOUNDARY_EPSILON));
    }

    #[test]
    fn test_viewer_on_corner_counts_as_boundary() {
        assert!(is_boundary(1.0, 1.0, 1, 1, (0.0, 1.0), BOUNDARY_EPSILON));
    }
}
