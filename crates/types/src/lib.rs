//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the raycaster.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (casting, shading, input mapping, terminal rendering).
//!
//! # Coordinates
//!
//! The world is a grid of unit tiles addressed row-major:
//!
//! - **Column** = `x` (left to right), **row** = `y` (top to bottom)
//! - A world position `(x, y)` lies in the tile `(floor(x), floor(y))`
//! - Heading `0.0` faces `+y`; the facing vector is `(sin(a), cos(a))`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | Render columns |
//! | `SCREEN_HEIGHT` | 40 | Render rows |
//! | `MAP_WIDTH` / `MAP_HEIGHT` | 16 | Built-in map size |
//! | `FOV` | π/3 | Horizontal field of view (radians) |
//! | `MAX_DEPTH` | 16.0 | Ray travel limit (world units) |
//! | `MOVE_SPEED` | 5.0 | World units per second |
//! | `RAY_STEP` | 0.01 | Ray march increment |
//! | `BOUNDARY_EPSILON` | 0.01 | Corner alignment threshold (radians) |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Intent, Intents, PlayerState, Tile};
//!
//! assert_eq!(Tile::from_char('#'), Tile::Wall);
//! assert_eq!(Tile::from_char('.'), Tile::Empty);
//!
//! let intents = Intents::NONE.with(Intent::MoveForward);
//! assert!(intents.move_forward);
//! assert!(!intents.rotate_left);
//!
//! let p = PlayerState::new(1.5, 2.5, 0.0);
//! assert_eq!(p.cell(), (1, 2));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Render width in character columns.
pub const SCREEN_WIDTH: u16 = 120;

/// Render height in character rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Built-in map width in tiles.
pub const MAP_WIDTH: usize = 16;

/// Built-in map height in tiles.
pub const MAP_HEIGHT: usize = 16;

/// Horizontal field of view in radians.
pub const FOV: f32 = std::f32::consts::FRAC_PI_3;

/// Maximum ray travel before a column is treated as "no wall found".
pub const MAX_DEPTH: f32 = 16.0;

/// Walking speed in world units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Rotation rate as a fraction of `MOVE_SPEED` (radians per second per unit of speed).
pub const ROTATION_FACTOR: f32 = 0.35;

/// Ray march increment in world units.
pub const RAY_STEP: f32 = 0.01;

/// Angular threshold under which a ray counts as grazing a tile corner.
pub const BOUNDARY_EPSILON: f32 = 0.01;

/// Lower bound applied to distances before they are used as a divisor.
pub const MIN_DISTANCE: f32 = 0.01;

/// Default start position and heading.
pub const START_X: f32 = 14.7;
pub const START_Y: f32 = 5.09;
pub const START_HEADING: f32 = 0.0;

/// Built-in map, one string per row (`#` = wall).
pub const DEFAULT_MAP: [&str; MAP_HEIGHT] = [
    "#########.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#......##......#",
    "#......#########",
    "#..............#",
    "#..............#",
    "#..............#",
    "#######....#####",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

/// Glyph palette of the output grid.
pub mod glyph {
    pub const BLANK: char = ' ';

    pub const WALL_SOLID: char = '\u{2588}';
    pub const WALL_DARK: char = '\u{2593}';
    pub const WALL_MEDIUM: char = '\u{2592}';
    pub const WALL_LIGHT: char = '\u{2591}';

    pub const FLOOR_NEAR: char = '#';
    pub const FLOOR_MID_NEAR: char = 'x';
    pub const FLOOR_MID: char = '.';
    pub const FLOOR_FAR: char = '-';

    /// Wall tiers from nearest to farthest.
    pub const WALL_TIERS: [char; 4] = [WALL_SOLID, WALL_DARK, WALL_MEDIUM, WALL_LIGHT];

    /// Floor tiers from nearest (bottom of screen) to farthest.
    pub const FLOOR_TIERS: [char; 5] = [FLOOR_NEAR, FLOOR_MID_NEAR, FLOOR_MID, FLOOR_FAR, BLANK];

    pub fn is_wall(ch: char) -> bool {
        WALL_TIERS.contains(&ch)
    }
}

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

impl Tile {
    /// `#` is a wall, every other character is empty floor.
    pub fn from_char(ch: char) -> Self {
        if ch == '#' {
            Tile::Wall
        } else {
            Tile::Empty
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => '.',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Movement and rotation intents a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::RotateLeft,
        Intent::RotateRight,
        Intent::MoveForward,
        Intent::MoveBackward,
    ];

    /// Parse from a camelCase or snake_case name (case-insensitive).
    ///
    /// ```
    /// use tui_raycaster_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("rotateLeft"), Some(Intent::RotateLeft));
    /// assert_eq!(Intent::from_str("move_forward"), Some(Intent::MoveForward));
    /// assert_eq!(Intent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "rotateleft" => Some(Intent::RotateLeft),
            "rotateright" => Some(Intent::RotateRight),
            "moveforward" => Some(Intent::MoveForward),
            "movebackward" => Some(Intent::MoveBackward),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RotateLeft => "rotateLeft",
            Intent::RotateRight => "rotateRight",
            Intent::MoveForward => "moveForward",
            Intent::MoveBackward => "moveBackward",
        }
    }
}

/// Snapshot of held intents for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
}

impl Intents {
    pub const NONE: Intents = Intents {
        rotate_left: false,
        rotate_right: false,
        move_forward: false,
        move_backward: false,
    };

    pub fn with(mut self, intent: Intent) -> Self {
        self.set(intent, true);
        self
    }

    pub fn set(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::RotateLeft => self.rotate_left = held,
            Intent::RotateRight => self.rotate_right = held,
            Intent::MoveForward => self.move_forward = held,
            Intent::MoveBackward => self.move_backward = held,
        }
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::RotateLeft => self.rotate_left,
            Intent::RotateRight => self.rotate_right,
            Intent::MoveForward => self.move_forward,
            Intent::MoveBackward => self.move_backward,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Intents::NONE
    }

    /// Net rotation direction: -1 left, +1 right, 0 when idle or both held.
    pub fn turn_axis(&self) -> f32 {
        axis(self.rotate_left, self.rotate_right)
    }

    /// Net walk direction: +1 forward, -1 backward, 0 when idle or both held.
    pub fn walk_axis(&self) -> f32 {
        axis(self.move_backward, self.move_forward)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Player pose in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    /// Heading in radians; left unnormalized.
    pub heading: f32,
}

impl PlayerState {
    pub const fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Unit facing vector `(sin(heading), cos(heading))`.
    pub fn facing(&self) -> (f32, f32) {
        (self.heading.sin(), self.heading.cos())
    }

    /// Tile containing the player (may be negative when outside the map).
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(START_X, START_Y, START_HEADING)
    }
}

/// Result of casting the ray for one screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    /// Distance to the wall, capped at the render depth.
    pub distance: f32,
    /// The ray grazes a tile corner; rendered as a dark seam.
    pub boundary: bool,
    /// Tile hit as `(col, row)`; `None` when the ray left the map or ran out of depth.
    pub hit_cell: Option<(usize, usize)>,
}

impl RayResult {
    /// A ray that found nothing within `depth`.
    pub const fn miss(depth: f32) -> Self {
        Self {
            distance: depth,
            boundary: false,
            hit_cell: None,
        }
    }
}

/// Cooperative stop flag for the frame loop.
///
/// Clones share the same flag, so a key handler can request a stop that the
/// loop observes at the top of its next frame.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
