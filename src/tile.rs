use derive_more::Deref;

use crate::TILE_AREA;

/// A unique identifier for a tile, assigned in the order tiles are first seen
pub type TileId = usize;

/// A list of type T indexable by TileId
pub type IdMap<T> = Vec<T>;

/// The RGB pixel data of one tile in row major order.
/// Two tiles are the same tile iff their signatures are equal.
#[derive(Deref, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature(pub [[u8; 3]; TILE_AREA]);
