//! WorldMap module - the immutable tile grid
//!
//! The map is a W x H grid where each cell is a wall or empty floor.
//! Uses a flat vector in row-major order (`row * width + col`), with
//! column = x and row = y. Every lookup in the crate (ray casting and
//! collision) goes through this one convention.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::{Tile, DEFAULT_MAP};

/// Errors raised while building a map from text.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("map is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has {found} cells, expected {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found: usize,
    },

    #[error("failed to read map file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The world grid. Dimensions and content are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl WorldMap {
    /// Build a map from a single concatenated string of `width * height` characters.
    pub fn from_flat(width: usize, height: usize, cells: &str) -> Result<Self, MapError> {
        let tiles: Vec<Tile> = cells.chars().map(Tile::from_char).collect();
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if tiles.len() != width * height {
            return Err(MapError::DimensionMismatch {
                width,
                height,
                found: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build a map from one string per row. All rows must have the same length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let before = tiles.len();
            tiles.extend(line.as_ref().chars().map(Tile::from_char));
            let found = tiles.len() - before;
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// Parse newline-separated rows. Blank lines and trailing `\r` are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let map = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            width = map.width,
            height = map.height,
            "loaded map"
        );
        Ok(map)
    }

    /// An all-empty map. Rays always leave through the edge.
    ///
    /// A zero width or height gives a map with no tiles: every lookup is
    /// `None`, every position blocks, and [`WorldMap::rows`] yields nothing.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    /// An empty map enclosed by a one-tile wall border. Zero sizes behave as
    /// in [`WorldMap::open`].
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut tiles = vec![Tile::Empty; width * height];
        for row in 0..height {
            for col in 0..width {
                if row == 0 || col == 0 || row + 1 == height || col + 1 == width {
                    tiles[row * width + col] = Tile::Wall;
                }
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Tile at `(col, row)`, `None` outside the map.
    #[inline]
    pub fn get(&self, col: i32, row: i32) -> Option<Tile> {
        self.index(col, row).map(|i| self.tiles[i])
    }

    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Tile::Wall))
    }

    /// Whether a world position is blocked. Outside the map counts as blocked.
    pub fn blocks(&self, x: f32, y: f32) -> bool {
        self.get(x.floor() as i32, y.floor() as i32)
            .map_or(true, |t| t.is_wall())
    }

    /// Tile rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // `chunks` rejects 0; a zero-width map has no tiles to chunk anyway.
        self.tiles.chunks(self.width.max(1))
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        // The built-in map is a compile-time constant with uniform row lengths.
        Self::from_rows(&DEFAULT_MAP).unwrap_or_else(|_| Self::bordered(16, 16))
    }
}
