//! Terminal input module.
//!
//! Maps `crossterm` key events into held [`crate::types::Intents`] and exposes
//! them through the core [`InputSampler`](crate::core::InputSampler) trait.
//! Works on terminals with key-release events (keyboard enhancement protocol)
//! and on plain terminals, where a key counts as held until a short timeout
//! after its last press or auto-repeat event.

pub mod handler;
pub mod map;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use handler::{HeldIntents, KeyboardSampler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{intent_for_key, should_quit};
