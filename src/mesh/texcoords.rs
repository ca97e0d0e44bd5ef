//! Tile texture coordinates.
//!
//! The tile's source rectangle is enumerated clockwise in image pixel space,
//! pushed through the flip pipeline, normalized to UV space (V inverted,
//! since pixel origin is top-left and UV origin is bottom-left), optionally
//! tucked inward to avoid sampling seams, and reordered into the same CCW
//! output slots the position calculator uses.

use cgmath::{Point2, Vector2};

use crate::map::TileDef;

use super::Uv;

/// Apply the flip pipeline (diagonal, then horizontal, then vertical) to
/// `points`, pivoting around `pivot`. The diagonal flip transposes the two
/// axes about the pivot; horizontal/vertical mirror their axis.
fn transform_points_diag_first(
    points: &mut [Point2<f32>; 4],
    pivot: Point2<f32>,
    flip_diagonal: bool,
    flip_horizontal: bool,
    flip_vertical: bool,
) {
    for point in points.iter_mut() {
        let mut d = *point - pivot;
        if flip_diagonal {
            std::mem::swap(&mut d.x, &mut d.y);
        }
        if flip_horizontal {
            d.x = -d.x;
        }
        if flip_vertical {
            d.y = -d.y;
        }
        *point = pivot + d;
    }
}

/// Image pixel position to normalized UV.
fn point_to_texture_coordinate(p: Point2<f32>, image_size: Vector2<u32>) -> Uv {
    Uv {
        u: p.x / image_size.x as f32,
        v: 1.0 - p.y / image_size.y as f32,
    }
}

/// UV corners for one tile face, index-aligned with the position corners.
pub fn face_texture_coordinates(
    tile: &TileDef,
    flip_diagonal: bool,
    flip_horizontal: bool,
    flip_vertical: bool,
    texel_bias: f32,
) -> [Uv; 4] {
    let origin = Point2::new(
        tile.source_position.x as f32,
        tile.source_position.y as f32,
    );
    let w = tile.size.x as f32;
    let h = tile.size.y as f32;

    let mut points = [
        origin,
        origin + Vector2::new(w, 0.0),
        origin + Vector2::new(w, h),
        origin + Vector2::new(0.0, h),
    ];

    let center = origin + Vector2::new(w * 0.5, h * 0.5);
    transform_points_diag_first(&mut points, center, flip_diagonal, flip_horizontal, flip_vertical);

    // Unit tuck vectors point inward toward the rectangle center. They ride
    // through the same flip pipeline (pivoting at the origin) so the tuck
    // tracks whichever geometric corner each point lands on.
    let mut bias = 0.0;
    let mut tucks = [Point2::new(0.0, 0.0); 4];
    if texel_bias > 0.0 {
        bias = 1.0 / texel_bias;
        tucks = [
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
        ];
    }
    transform_points_diag_first(
        &mut tucks,
        Point2::new(0.0, 0.0),
        flip_diagonal,
        flip_horizontal,
        flip_vertical,
    );

    let coordinate = |i: usize| -> Uv {
        let base = point_to_texture_coordinate(points[i], tile.image_size);
        // V grows opposite to pixel Y, so the tuck's Y flips sign.
        Uv {
            u: base.u + tucks[i].x * bias,
            v: base.v + -tucks[i].y * bias,
        }
    };

    // Same slot reversal as the position corners: slots 3..0 from points 0..3.
    [coordinate(3), coordinate(2), coordinate(1), coordinate(0)]
}
