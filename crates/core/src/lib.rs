//! Core raycasting engine - pure, deterministic, and testable
//!
//! This crate contains the world model, the ray caster, the shader and the
//! motion controller. It has **no dependencies** on terminals, keyboards or
//! wall-clock scheduling beyond [`FrameClock`], making it:
//!
//! - **Deterministic**: Same map and pose always produce the same frame
//! - **Testable**: Every stage can be driven with explicit inputs
//! - **Portable**: The output is a plain glyph grid, independent of the display
//!
//! # Module Structure
//!
//! - [`map`]: immutable W x H tile grid, row-major (`row = y`, `col = x`)
//! - [`caster`]: one fixed-step ray per screen column
//! - [`boundary`]: corner alignment test for darkened tile seams
//! - [`shader`]: banded wall/floor glyph lookup into a [`GlyphBuffer`]
//! - [`motion`]: rotation and revert-on-wall movement
//! - [`clock`]: monotonic frame timing
//! - [`config`]: startup configuration and validation
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{EngineConfig, GlyphBuffer, RayCaster, Shader, WorldMap};
//! use tui_raycaster_core::types::PlayerState;
//!
//! let map = WorldMap::bordered(16, 16);
//! let config = EngineConfig::default()
//!     .with_start(PlayerState::new(8.0, 8.0, 0.0));
//! config.validate(&map).unwrap();
//!
//! let rays = RayCaster::new(&config).cast(&map, &config.start);
//! assert_eq!(rays.len(), config.screen_width as usize);
//!
//! let mut frame = GlyphBuffer::new(config.screen_width, config.screen_height);
//! Shader::new(&config).shade_frame(&mut frame, &rays);
//! ```

pub mod boundary;
pub mod buffer;
pub mod caster;
pub mod clock;
pub mod config;
pub mod map;
pub mod motion;
pub mod shader;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use boundary::is_boundary;
pub use buffer::GlyphBuffer;
pub use caster::RayCaster;
pub use clock::FrameClock;
pub use config::{ConfigError, EngineConfig};
pub use map::{MapError, WorldMap};
pub use motion::{InputSampler, MotionController, MoveOutcome};
pub use shader::{ShadeBand, Shader};
