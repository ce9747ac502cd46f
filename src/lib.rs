pub mod error;
pub mod image_utils;
pub mod preprocessor;
pub mod report;
pub mod tile;

use std::path::Path;

use glam::UVec2;

pub use error::{ErrorKind, TileifyError};
pub use report::Report;

/// Width and height of a tile in pixels
pub const TILE_SIZE: u32 = 8;
/// Number of pixels in a tile
pub const TILE_AREA: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// Loads the image at `path` and counts its unique tiles.
pub fn count_unique_tiles<P: AsRef<Path>>(path: P) -> Result<Report, TileifyError> {
    let image = image_utils::load(path)?;
    let image = image_utils::normalize(image);
    return Ok(Report::from_image(&image));
}

/// Row major iterator over the top left corners of every whole
/// `tile_size` x `tile_size` tile that fits in `dims`.
/// Partial tiles on the right and bottom edges are skipped.
#[derive(Clone, Debug)]
pub struct TileLocs {
    cur: UVec2,
    end: UVec2,
    step: u32,
}

impl TileLocs {
    /// Panics if `tile_size` is zero.
    pub fn new<U: Into<UVec2>>(dims: U, tile_size: u32) -> Self {
        assert!(tile_size > 0, "tile size must be non-zero");
        let dims: UVec2 = dims.into();
        // trim edges
        let end = dims - (dims % tile_size);
        return Self {
            cur: UVec2::ZERO,
            end,
            step: tile_size,
        };
    }

    /// Total number of tiles, independent of how far the iterator has advanced
    pub fn tile_count(&self) -> usize {
        let tiles = self.end / self.step;
        return (tiles.x * tiles.y) as usize;
    }

    fn remaining(&self) -> usize {
        if self.cur.y >= self.end.y || self.end.x == 0 {
            return 0;
        }
        let cols = (self.end.x / self.step) as usize;
        let rows_left = ((self.end.y - self.cur.y) / self.step) as usize;
        let done_in_row = (self.cur.x / self.step) as usize;
        return rows_left * cols - done_in_row;
    }
}

impl Iterator for TileLocs {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.y >= self.end.y || self.end.x == 0 {
            return None;
        }
        let ret = self.cur;
        self.cur.x += self.step;
        if self.cur.x >= self.end.x {
            self.cur.x = 0;
            self.cur.y += self.step;
        }
        return Some(ret);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        return (remaining, Some(remaining));
    }
}

impl ExactSizeIterator for TileLocs {}
