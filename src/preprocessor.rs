use glam::UVec2;
use image::RgbImage;
use std::collections::HashMap;

use crate::{
    tile::{IdMap, Signature, TileId},
    TileLocs, TILE_AREA, TILE_SIZE,
};

/// The distinct tiles of an image along with how often and where each was seen
#[derive(Debug, Default, Clone)]
pub struct TileSet {
    ids: HashMap<Signature, TileId>,
    frequencies: IdMap<usize>,
    origins: IdMap<UVec2>,
    blocks: usize,
}

impl TileSet {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Records the tile found at `loc`.
    /// Returns the tile's id and whether it had not been seen before.
    pub fn insert(&mut self, loc: UVec2, signature: Signature) -> (TileId, bool) {
        self.blocks += 1;
        if let Some(&existing_id) = self.ids.get(&signature) {
            self.frequencies[existing_id] += 1;
            return (existing_id, false);
        }
        // add new tile
        let id = self.frequencies.len();
        self.ids.insert(signature, id);
        self.frequencies.push(1);
        self.origins.push(loc);
        return (id, true);
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        return self.ids.contains_key(signature);
    }

    pub fn id_of(&self, signature: &Signature) -> Option<TileId> {
        return self.ids.get(signature).copied();
    }

    /// Number of distinct tiles
    pub fn len(&self) -> usize {
        return self.ids.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Number of tiles inserted, repeats included
    pub fn blocks(&self) -> usize {
        return self.blocks;
    }

    pub fn duplicates(&self) -> usize {
        return self.blocks - self.len();
    }

    pub fn frequency(&self, id: TileId) -> Option<usize> {
        return self.frequencies.get(id).copied();
    }

    pub fn frequencies(&self) -> &[usize] {
        return &self.frequencies;
    }

    /// Location where the tile was first seen
    pub fn origin(&self, id: TileId) -> Option<UVec2> {
        return self.origins.get(id).copied();
    }
}

/// Reads the tile whose top left corner is `loc`.
/// `loc` must leave room for a whole tile inside `image`.
pub fn signature_at(image: &RgbImage, loc: UVec2) -> Signature {
    let mut pixels = [[0u8; 3]; TILE_AREA];
    let offsets = TileLocs::new(UVec2::splat(TILE_SIZE), 1);
    for (pixel, offset) in pixels.iter_mut().zip(offsets) {
        let l = loc + offset;
        *pixel = image.get_pixel(l.x, l.y).0;
    }
    return Signature(pixels);
}

/// Walks every whole tile of `image` in row major order and collects the distinct ones.
pub fn extract_tiles(image: &RgbImage) -> TileSet {
    let mut tiles = TileSet::new();
    for loc in TileLocs::new(image.dimensions(), TILE_SIZE) {
        log::trace!("visiting tile at {loc}");
        let (id, new_tile) = tiles.insert(loc, signature_at(image, loc));
        if new_tile {
            log::debug!("new tile {id} at {loc}");
        }
    }
    log::info!(
        "{} tiles, {} unique, {} duplicates",
        tiles.blocks(),
        tiles.len(),
        tiles.duplicates()
    );
    return tiles;
}
