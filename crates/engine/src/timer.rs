//! Frame timing sources.

use crate::core::FrameClock;

/// Yields the elapsed seconds for each frame.
pub trait FrameTimer {
    fn elapsed(&mut self) -> f32;
}

impl FrameTimer for FrameClock {
    fn elapsed(&mut self) -> f32 {
        self.tick()
    }
}

/// Constant timestep, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimer(pub f32);

impl FrameTimer for FixedTimer {
    fn elapsed(&mut self) -> f32 {
        self.0
    }
}
