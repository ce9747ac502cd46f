use std::fmt;

use glam::UVec2;
use image::RgbImage;

use crate::{preprocessor, TILE_SIZE};

/// Summary of one image's tile content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub dimensions: UVec2,
    pub blocks: usize,
    pub unique: usize,
}

impl Report {
    pub fn from_image(image: &RgbImage) -> Self {
        let tiles = preprocessor::extract_tiles(image);
        return Self {
            dimensions: image.dimensions().into(),
            blocks: tiles.blocks(),
            unique: tiles.len(),
        };
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: ({}, {})", self.dimensions.x, self.dimensions.y)?;
        write!(
            f,
            "Number of unique {TILE_SIZE}x{TILE_SIZE} blocks: {}",
            self.unique
        )
    }
}
