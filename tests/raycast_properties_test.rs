//! Ray casting behaviour on small hand-built maps.

use std::f32::consts::{FRAC_PI_4, PI};

use tui_raycaster::core::{EngineConfig, RayCaster, WorldMap};
use tui_raycaster::types::{PlayerState, RayResult};

fn single_wall(col: usize, row: usize) -> WorldMap {
    let rows: Vec<String> = (0..16)
        .map(|r| {
            (0..16)
                .map(|c| if (c, r) == (col, row) { '#' } else { '.' })
                .collect()
        })
        .collect();
    WorldMap::from_rows(&rows).unwrap()
}

fn caster(width: u16) -> RayCaster {
    let mut config = EngineConfig::default().with_screen(width, 40);
    config.fov = PI / 3.0;
    config.depth = 16.0;
    RayCaster::new(&config)
}

#[test]
fn test_open_field_reports_max_depth_everywhere() {
    let map = WorldMap::open(16, 16);
    let c = caster(120);
    for &(x, y, heading) in &[(8.0, 8.0, 0.0), (0.5, 15.5, 2.0), (3.3, 7.9, -11.0)] {
        let rays = c.cast(&map, &PlayerState::new(x, y, heading));
        assert_eq!(rays.len(), 120);
        for ray in rays {
            assert_eq!(ray, RayResult::miss(16.0));
        }
    }
}

#[test]
fn test_bordered_room_centre_column_sees_far_wall_at_seven() {
    let map = WorldMap::bordered(16, 16);
    let c = caster(120);
    let rays = c.cast(&map, &PlayerState::new(8.0, 8.0, 0.0));

    let centre = rays[60];
    assert_eq!(centre.hit_cell, Some((8, 15)));
    assert!((centre.distance - 7.0).abs() <= 0.011, "distance {}", centre.distance);
    // x = 8 lines the ray up with the corner (8, 15) of the hit tile.
    assert!(centre.boundary);
}

#[test]
fn test_bordered_room_centre_column_off_the_grid_line_is_a_plain_face() {
    let map = WorldMap::bordered(16, 16);
    let c = caster(120);
    let centre = c.cast_column(&map, &PlayerState::new(8.5, 8.0, 0.0), 60);

    assert_eq!(centre.hit_cell, Some((8, 15)));
    assert!((centre.distance - 7.0).abs() <= 0.011, "distance {}", centre.distance);
    assert!(!centre.boundary);
}

#[test]
fn test_default_map_start_pose_sees_nearby_wall() {
    let map = WorldMap::default();
    let c = caster(120);
    let centre = c.cast_column(&map, &PlayerState::default(), 60);

    // Row 7 is "#......#########"; the player stands in row 5 at x = 14.7.
    assert_eq!(centre.hit_cell, Some((14, 7)));
    assert!((centre.distance - (7.0 - 5.09)).abs() <= 0.011);
}

#[test]
fn test_ray_towards_tile_corner_is_a_boundary() {
    let map = single_wall(5, 5);
    let c = caster(120);
    // From (2,2) the corner (5,5) lies at 45 degrees.
    let ray = c.cast_ray(&map, &PlayerState::new(2.0, 2.0, 0.0), FRAC_PI_4);
    assert_eq!(ray.hit_cell, Some((5, 5)));
    assert!(ray.boundary);
}

#[test]
fn test_ray_through_face_centre_is_not_a_boundary() {
    let map = single_wall(2, 6);
    let c = caster(120);
    let ray = c.cast_ray(&map, &PlayerState::new(2.5, 2.5, 0.0), 0.0);
    assert_eq!(ray.hit_cell, Some((2, 6)));
    assert!((ray.distance - 3.5).abs() <= 0.011);
    assert!(!ray.boundary);
}

#[test]
fn test_casting_is_deterministic() {
    let map = WorldMap::default();
    let c = caster(120);
    let pose = PlayerState::new(5.3, 9.7, 1.234);
    let a = c.cast(&map, &pose);
    let b = c.cast(&map, &pose);
    assert_eq!(a, b);

    let mut reused = Vec::new();
    c.cast_into(&map, &pose, &mut reused);
    assert_eq!(a, reused);
}

#[test]
fn test_columns_run_left_to_right() {
    let map = single_wall(7, 12);
    let c = caster(120);
    // Facing +y, the leftmost column looks towards smaller x, so a wall at
    // (7, 12) seen from (8.5, 8.5) lands in the left half of the screen.
    let rays = c.cast(&map, &PlayerState::new(8.5, 8.5, 0.0));
    let hits: Vec<usize> = rays
        .iter()
        .enumerate()
        .filter(|(_, r)| r.hit_cell == Some((7, 12)))
        .map(|(i, _)| i)
        .collect();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|&i| i < 60));
}
