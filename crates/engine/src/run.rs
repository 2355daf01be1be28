//! The frame loop and its display collaborator.

use anyhow::Result;

use crate::core::{GlyphBuffer, InputSampler};
use crate::frame::{Engine, FrameStats};
use crate::timer::FrameTimer;
use crate::types::StopSignal;

/// Pushes a finished frame to a display surface.
pub trait Presenter {
    fn present(&mut self, frame: &GlyphBuffer, stats: &FrameStats) -> Result<()>;
}

/// Run until `stop` is raised. Returns the number of simulated frames.
pub fn run<P, S, T>(
    engine: &mut Engine,
    presenter: &mut P,
    sampler: &mut S,
    timer: &mut T,
    stop: &StopSignal,
) -> Result<u64>
where
    P: Presenter + ?Sized,
    S: InputSampler + ?Sized,
    T: FrameTimer + ?Sized,
{
    run_frames(engine, presenter, sampler, timer, stop, None)
}

/// Run until `stop` is raised or `max_frames` frames have been simulated.
pub fn run_frames<P, S, T>(
    engine: &mut Engine,
    presenter: &mut P,
    sampler: &mut S,
    timer: &mut T,
    stop: &StopSignal,
    max_frames: Option<u64>,
) -> Result<u64>
where
    P: Presenter + ?Sized,
    S: InputSampler + ?Sized,
    T: FrameTimer + ?Sized,
{
    let mut frames = 0u64;

    while !stop.is_stopped() && max_frames.map_or(true, |max| frames < max) {
        // Previous frame first: the display lags the pose by one frame.
        presenter.present(engine.frame(), engine.stats())?;

        let dt = timer.elapsed();
        let intents = sampler.sample();
        let outcome = engine.step(dt, intents);
        tracing::trace!(frame = frames, dt, ?intents, ?outcome, "frame");

        frames += 1;
    }

    tracing::debug!(frames, "frame loop stopped");
    Ok(frames)
}
