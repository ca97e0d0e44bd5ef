//! Input tile-map data model.
//!
//! A TMX parser (out of scope for this crate) fills these structures. Raw
//! tile ids carry flip flags in their top three bits, same bit layout the
//! Tiled editor writes; the helpers below strip and query them.

use std::collections::HashMap;

use cgmath::{Point2, Vector2};

// ============================================================================
// Tile id flag bits
// ============================================================================

pub const FLIPPED_HORIZONTALLY_FLAG: u32 = 0x8000_0000;
pub const FLIPPED_VERTICALLY_FLAG: u32 = 0x4000_0000;
pub const FLIPPED_DIAGONALLY_FLAG: u32 = 0x2000_0000;

const ALL_FLIP_FLAGS: u32 =
    FLIPPED_HORIZONTALLY_FLAG | FLIPPED_VERTICALLY_FLAG | FLIPPED_DIAGONALLY_FLAG;

/// Strip the flip bits from a raw tile id, leaving the tile definition index.
pub fn tile_id_without_flags(raw_id: u32) -> u32 {
    raw_id & !ALL_FLIP_FLAGS
}

pub fn is_flipped_horizontally(raw_id: u32) -> bool {
    raw_id & FLIPPED_HORIZONTALLY_FLAG != 0
}

pub fn is_flipped_vertically(raw_id: u32) -> bool {
    raw_id & FLIPPED_VERTICALLY_FLAG != 0
}

pub fn is_flipped_diagonally(raw_id: u32) -> bool {
    raw_id & FLIPPED_DIAGONALLY_FLAG != 0
}

// ============================================================================
// Map structures
// ============================================================================

/// One tile definition from a tileset.
#[derive(Debug, Clone)]
pub struct TileDef {
    /// Tile size in pixels. May be taller than the map's nominal tile height.
    pub size: Vector2<u32>,
    /// Top-left corner of the tile's rectangle in its source image.
    pub source_position: Point2<u32>,
    /// Full size of the source image the tile is cut from.
    pub image_size: Vector2<u32>,
    /// Placement offset, applied when the tile is used as a tile object.
    pub offset: Vector2<f32>,
}

/// One draw batch of a layer: a named grid of raw tile ids.
///
/// A layer is partitioned into one mesh per tileset it touches; each mesh
/// holds the full grid with 0 (empty) in the cells it does not cover.
#[derive(Debug, Clone)]
pub struct LayerMesh {
    pub name: String,
    /// Raw tile id per cell, row-major. 0 means empty.
    pub tile_ids: Vec<u32>,
}

impl LayerMesh {
    /// Raw tile id at a grid index; out-of-range reads as empty.
    pub fn tile_id_at(&self, index: usize) -> u32 {
        self.tile_ids.get(index).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct TileLayer {
    pub width: u32,
    pub height: u32,
    pub visible: bool,
    /// Layer is flagged to skip visual output (collision-only layers).
    pub ignore_visual: bool,
    pub meshes: Vec<LayerMesh>,
}

impl TileLayer {
    /// Row-major grid index of cell (x, y).
    pub fn tile_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }
}

/// A unique visible tile object, exported as its own single-quad mesh.
#[derive(Debug, Clone)]
pub struct ObjectMesh {
    pub name: String,
    /// Stripped tile id (no flip flags).
    pub tile_id: u32,
    /// Placement offset of the quad; the object's container supplies the
    /// world position and depth.
    pub offset: Vector2<f32>,
}

#[derive(Debug, Clone)]
pub struct TileMap {
    /// Nominal tile size of the map grid, in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
    /// Map size in cells.
    pub width: u32,
    pub height: u32,
    /// Cell enumeration direction per axis: +1 ascending, -1 reversed.
    pub draw_order_horizontal: i32,
    pub draw_order_vertical: i32,
    /// Tile definitions keyed by stripped tile id.
    pub tiles: HashMap<u32, TileDef>,
    pub layers: Vec<TileLayer>,
    /// Unique visible tile-object meshes.
    pub object_meshes: Vec<ObjectMesh>,
}

impl TileMap {
    /// Map size in pixels.
    pub fn pixel_size(&self) -> Vector2<u32> {
        Vector2::new(self.width * self.tile_width, self.height * self.tile_height)
    }

    /// Tile definition for a stripped id.
    pub fn tile(&self, stripped_id: u32) -> Option<&TileDef> {
        self.tiles.get(&stripped_id)
    }

    /// Pixel-space anchor of cell (x, y). Orthogonal projection: the anchor
    /// is the cell's top-left corner on the map grid.
    pub fn map_position_at(&self, x: u32, y: u32) -> Point2<f32> {
        Point2::new(
            (x * self.tile_width) as f32,
            (y * self.tile_height) as f32,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
