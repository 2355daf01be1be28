//! Frame loop for the raycaster.
//!
//! Ties the pure core together into the per-frame sequence:
//!
//! 1. present the previous frame
//! 2. sample the frame clock
//! 3. sample input intents
//! 4. rotate, then move with collision
//! 5. cast and shade the frame for the next presentation
//!
//! Presentation therefore always lags the latest pose by one frame. The loop
//! runs until its [`StopSignal`](crate::types::StopSignal) is raised.

pub mod frame;
pub mod run;
pub mod timer;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use frame::{Engine, FrameStats};
pub use run::{run, run_frames, Presenter};
pub use timer::{FixedTimer, FrameTimer};
