//! Tile quad corner positions in output model space.
//!
//! Map pixel space runs Y-down; the mesh format runs Y-up with CCW face
//! winding. Corners are enumerated clockwise in pixel space (top-left,
//! top-right, bottom-right, bottom-left), converted by negating Y, and
//! stored reversed into output slots 3..0 so emitted order winds CCW.

use cgmath::{Point2, Vector2};

use super::Vertex3;

/// Four ordered quad corners plus the depth applied to each emitted vertex.
#[derive(Debug, Clone, Copy)]
pub struct FaceCorners {
    pub points: [Point2<f32>; 4],
    pub depth: f32,
}

impl FaceCorners {
    /// Vertex for one output corner slot.
    pub fn vertex(&self, corner: usize) -> Vertex3 {
        let p = self.points[corner];
        Vertex3 {
            x: p.x,
            y: p.y,
            z: self.depth,
        }
    }
}

/// Pixel space (Y-down) to mesh space (Y-up).
fn to_mesh_space(p: Point2<f32>) -> Point2<f32> {
    Point2::new(p.x, -p.y)
}

/// Reverse the clockwise pixel-space enumeration into CCW output slots.
fn ccw_reorder(pt0: Point2<f32>, pt1: Point2<f32>, pt2: Point2<f32>, pt3: Point2<f32>) -> [Point2<f32>; 4] {
    [
        to_mesh_space(pt3),
        to_mesh_space(pt2),
        to_mesh_space(pt1),
        to_mesh_space(pt0),
    ]
}

/// Corners of a map-anchored tile quad.
///
/// Tiles taller than the map's nominal tile height hang upward from their
/// cell, so the anchor is corrected by `-(tile_height - map_tile_height)`.
pub fn face_corners_at(
    anchor: Point2<f32>,
    tile_size: Vector2<u32>,
    map_tile_height: u32,
) -> [Point2<f32>; 4] {
    let w = tile_size.x as f32;
    let h = tile_size.y as f32;
    let anchor = anchor + Vector2::new(0.0, -(h - map_tile_height as f32));

    let pt0 = anchor;
    let pt1 = anchor + Vector2::new(w, 0.0);
    let pt2 = anchor + Vector2::new(w, h);
    let pt3 = anchor + Vector2::new(0.0, h);
    ccw_reorder(pt0, pt1, pt2, pt3)
}

/// Corners of a free-floating tile-object quad: the rectangle at the origin,
/// translated by the object's offset. Depth is the caller's concern.
pub fn face_corners_for_object(tile_size: Vector2<u32>, offset: Vector2<f32>) -> [Point2<f32>; 4] {
    let w = tile_size.x as f32;
    let h = tile_size.y as f32;
    let origin = Point2::new(0.0, 0.0) + offset;

    let pt0 = origin;
    let pt1 = origin + Vector2::new(w, 0.0);
    let pt2 = origin + Vector2::new(w, h);
    let pt3 = origin + Vector2::new(0.0, h);
    ccw_reorder(pt0, pt1, pt2, pt3)
}

/// Depth of a face whose bottom edge sits at `y_bottom` pixels on a map
/// `map_pixel_height` pixels tall. Strictly decreasing in `y_bottom`, so
/// faces lower on screen sort in front. `-0.0` is normalized to `0.0` to
/// keep the serialized form stable.
pub fn face_depth(y_bottom: f32, map_pixel_height: f32) -> f32 {
    let depth = -(y_bottom / map_pixel_height);
    if depth == 0.0 {
        0.0
    } else {
        depth
    }
}
