//! ScreenView: maps a shaded glyph frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GlyphBuffer, WorldMap};
use crate::engine::FrameStats;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::glyph;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYER_MARKER: char = 'P';

/// Colour for each glyph of the palette; walls fade with distance.
pub fn glyph_style(ch: char) -> CellStyle {
    let fg = match ch {
        glyph::WALL_SOLID => Rgb::gray(235),
        glyph::WALL_DARK => Rgb::gray(195),
        glyph::WALL_MEDIUM => Rgb::gray(155),
        glyph::WALL_LIGHT => Rgb::gray(115),
        glyph::FLOOR_NEAR => Rgb::new(150, 110, 70),
        glyph::FLOOR_MID_NEAR => Rgb::new(130, 95, 60),
        glyph::FLOOR_MID => Rgb::new(110, 80, 50),
        glyph::FLOOR_FAR => Rgb::new(90, 65, 40),
        _ => return CellStyle::default(),
    };
    CellStyle::fg(fg)
}

/// Renders the 3D view, with an optional HUD line and minimap on top.
#[derive(Debug, Clone)]
pub struct ScreenView {
    show_hud: bool,
    minimap: Option<WorldMap>,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            show_hud: true,
            minimap: None,
        }
    }
}

impl ScreenView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hud(mut self, show: bool) -> Self {
        self.show_hud = show;
        self
    }

    /// Draw `map` under the HUD line with the player's tile marked.
    pub fn with_minimap(mut self, map: WorldMap) -> Self {
        self.minimap = Some(map);
        self
    }

    /// Top-left corner of the frame when centred in `viewport`.
    pub fn origin(&self, frame: &GlyphBuffer, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(frame.width()) / 2,
            viewport.height.saturating_sub(frame.height()) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        frame: &GlyphBuffer,
        stats: &FrameStats,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (ox, oy) = self.origin(frame, viewport);
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if let Some(ch) = frame.get(x, y) {
                    fb.put_char(ox.saturating_add(x), oy.saturating_add(y), ch, glyph_style(ch));
                }
            }
        }

        let mut overlay_y = oy;
        if self.show_hud {
            self.draw_hud(fb, ox, overlay_y, stats);
            overlay_y = overlay_y.saturating_add(1);
        }
        if let Some(map) = &self.minimap {
            self.draw_minimap(fb, map, ox, overlay_y, stats);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &GlyphBuffer, stats: &FrameStats, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, stats, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, x: u16, y: u16, stats: &FrameStats) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let p = stats.player;
        let line = format!(
            "X={:.2}, Y={:.2}, A={:.2} FPS={:.1}",
            p.x, p.y, p.heading, stats.fps
        );
        fb.put_str(x, y, &line, style);
    }

    fn draw_minimap(&self, fb: &mut FrameBuffer, map: &WorldMap, x: u16, y: u16, stats: &FrameStats) {
        let wall = CellStyle::fg(Rgb::gray(200));
        let floor = CellStyle::fg(Rgb::gray(90));
        let marker = CellStyle {
            fg: Rgb::new(255, 80, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        for (row, tiles) in map.rows().enumerate() {
            let py = y as usize + row;
            if py > u16::MAX as usize {
                break;
            }
            for (col, tile) in tiles.iter().enumerate() {
                let px = x as usize + col;
                if px > u16::MAX as usize {
                    break;
                }
                let style = if tile.is_wall() { wall } else { floor };
                fb.put_char(px as u16, py as u16, tile.as_char(), style);
            }
        }

        let (col, row) = stats.player.cell();
        if col >= 0 && row >= 0 && (col as usize) < map.width() && (row as usize) < map.height() {
            let px = x as usize + col as usize;
            let py = y as usize + row as usize;
            if px <= u16::MAX as usize && py <= u16::MAX as usize {
                fb.put_char(px as u16, py as u16, PLAYER_MARKER, marker);
            }
        }
    }
}
