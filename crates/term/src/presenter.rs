//! TerminalPresenter: the frame loop's display collaborator.

use anyhow::Result;

use crate::core::GlyphBuffer;
use crate::engine::{FrameStats, Presenter};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::view::{ScreenView, Viewport};

/// Lays out each frame with a [`ScreenView`] and flushes it through a
/// [`TerminalRenderer`], following terminal resizes.
pub struct TerminalPresenter {
    renderer: TerminalRenderer,
    view: ScreenView,
    fb: FrameBuffer,
    viewport: Option<Viewport>,
}

impl TerminalPresenter {
    pub fn new(renderer: TerminalRenderer, view: ScreenView) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            viewport: None,
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, frame: &GlyphBuffer, stats: &FrameStats) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((frame.width(), frame.height()));
        let viewport = Viewport::new(w, h);
        if self.viewport != Some(viewport) {
            self.renderer.invalidate();
            self.viewport = Some(viewport);
        }

        self.view.render_into(frame, stats, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
