use tui_raycaster::core::{EngineConfig, MotionController, MoveOutcome, WorldMap};
use tui_raycaster::types::{Intent, Intents, PlayerState, ROTATION_FACTOR};

fn held(intents: &[Intent]) -> Intents {
    intents.iter().fold(Intents::NONE, |acc, &i| acc.with(i))
}

#[test]
fn test_forward_step_into_wall_leaves_pose_unchanged() {
    let map = WorldMap::default();
    let mc = MotionController::new(&EngineConfig::default());
    // Row 7 is a wall under x = 14; 0.2 s at speed 5 crosses into it.
    let mut p = PlayerState::new(14.5, 6.5, 0.0);
    let before = p;

    let outcome = mc.update(&mut p, &map, 0.2, held(&[Intent::MoveForward]));
    assert_eq!(outcome, MoveOutcome::Blocked);
    assert!((p.x - before.x).abs() < 1e-6);
    assert!((p.y - before.y).abs() < 1e-6);
    assert_eq!(p.heading, before.heading);
}

#[test]
fn test_movement_intents_never_touch_heading() {
    let map = WorldMap::open(16, 16);
    let mc = MotionController::with_speed(5.0);
    let mut p = PlayerState::new(8.0, 8.0, 0.7);
    for _ in 0..10 {
        mc.update(&mut p, &map, 0.05, held(&[Intent::MoveForward]));
        mc.update(&mut p, &map, 0.02, held(&[Intent::MoveBackward]));
    }
    assert_eq!(p.heading, 0.7);
}

#[test]
fn test_rotate_right_is_linear_in_time() {
    let map = WorldMap::open(4, 4);
    let speed = 5.0;
    let mc = MotionController::with_speed(speed);
    for t in [0.016f32, 0.1, 0.5, 2.0] {
        let mut p = PlayerState::new(2.0, 2.0, 0.0);
        mc.update(&mut p, &map, t, held(&[Intent::RotateRight]));
        let expected = ROTATION_FACTOR * speed * t;
        assert!((p.heading - expected).abs() < 1e-5, "t={t}");
    }
}

#[test]
fn test_opposing_intents_cancel() {
    let map = WorldMap::open(16, 16);
    let mc = MotionController::with_speed(5.0);
    let mut p = PlayerState::new(8.0, 8.0, 0.3);
    let before = p;

    let outcome = mc.update(
        &mut p,
        &map,
        0.5,
        held(&[
            Intent::RotateLeft,
            Intent::RotateRight,
            Intent::MoveForward,
            Intent::MoveBackward,
        ]),
    );
    assert_eq!(outcome, MoveOutcome::Idle);
    assert_eq!(p, before);
}

#[test]
fn test_rotation_applies_before_movement() {
    let map = WorldMap::open(16, 16);
    let mc = MotionController::with_speed(1.0);
    let mut p = PlayerState::new(8.0, 8.0, 0.0);
    // One second of turning right at 0.35 rad/s, then one unit forward.
    mc.update(
        &mut p,
        &map,
        1.0,
        held(&[Intent::RotateRight, Intent::MoveForward]),
    );
    assert!((p.x - (8.0 + 0.35f32.sin())).abs() < 1e-5);
    assert!((p.y - (8.0 + 0.35f32.cos())).abs() < 1e-5);
}

#[test]
fn test_walking_off_the_map_is_blocked() {
    let map = WorldMap::open(4, 4);
    let mc = MotionController::with_speed(5.0);
    let mut p = PlayerState::new(2.0, 3.9, 0.0);
    assert_eq!(
        mc.update(&mut p, &map, 0.1, held(&[Intent::MoveForward])),
        MoveOutcome::Blocked
    );
    assert_eq!(p.y, 3.9);
}
