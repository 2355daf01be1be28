//! Glyph buffer - the character grid a frame is shaded into.

use crate::types::glyph;

/// Owned, bounds-checked grid of glyphs in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl GlyphBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![glyph::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Write a glyph. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, col: u16, row: u16, ch: char) -> bool {
        match self.idx(col, row) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(glyph::BLANK);
    }

    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    pub fn column(&self, col: u16) -> impl Iterator<Item = char> + '_ {
        (0..self.height).filter_map(move |row| self.get(col, row))
    }

    /// Render as text, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in 0..self.height {
            if let Some(cells) = self.row(row) {
                out.extend(cells.iter());
            }
            out.push('\n');
        }
        out
    }
}
