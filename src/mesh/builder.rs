//! Walks the tile map and accumulates the mesh document.
//!
//! Two passes: visible tile layers (one face group per layer mesh, cells
//! enumerated in draw order) and unique visible tile objects (one
//! single-face group each). Vertices and UVs register into the index stores
//! as faces are built, so store order follows encounter order exactly and
//! the finished document is reproducible byte for byte.

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::map::{self, TileMap};
use crate::settings::ExportSettings;

use super::geometry::{face_corners_at, face_corners_for_object, face_depth, FaceCorners};
use super::store::{AppendStore, DedupStore, IndexStore};
use super::texcoords::face_texture_coordinates;
use super::{Face, FaceGroup, MeshDocument, Uv, Vertex3};

/// Build the mesh document for a map under the given settings.
///
/// Fails on the first raw tile id whose stripped index has no tile
/// definition; nothing partial is returned.
pub fn build_mesh_document(map: &TileMap, settings: &ExportSettings) -> Result<MeshDocument> {
    let mut vertex_store: Box<dyn IndexStore<Vertex3>> = if settings.writable_vertices {
        info!("writable-vertices enabled; equal vertices are stored unshared");
        Box::new(AppendStore::new())
    } else {
        Box::new(DedupStore::new())
    };
    let mut uv_store: DedupStore<Uv> = DedupStore::new();
    let mut groups: Vec<FaceGroup> = Vec::new();

    let map_pixel_height = map.pixel_size().y as f32;

    for layer in &map.layers {
        if !layer.visible || layer.ignore_visual {
            debug!("skipping non-visual layer");
            continue;
        }

        let rows = axis_range(layer.height, map.draw_order_vertical);
        let cols = axis_range(layer.width, map.draw_order_horizontal);

        for layer_mesh in &layer.meshes {
            info!(group = %layer_mesh.name, "writing tile-layer face group");
            let mut group = FaceGroup {
                name: layer_mesh.name.clone(),
                faces: Vec::new(),
            };

            for &y in &rows {
                for &x in &cols {
                    let raw_id = layer_mesh.tile_id_at(layer.tile_index(x, y));
                    if raw_id == 0 {
                        continue;
                    }

                    let stripped_id = map::tile_id_without_flags(raw_id);
                    let Some(tile) = map.tile(stripped_id) else {
                        bail!(
                            "mesh '{}' references unknown tile id {} at cell ({}, {})",
                            layer_mesh.name,
                            stripped_id,
                            x,
                            y
                        );
                    };

                    let anchor = map.map_position_at(x, y);
                    let depth = if settings.depth_buffer_enabled {
                        face_depth(anchor.y + map.tile_height as f32, map_pixel_height)
                    } else {
                        0.0
                    };
                    let corners = FaceCorners {
                        points: face_corners_at(anchor, tile.size, map.tile_height),
                        depth,
                    };

                    let uvs = face_texture_coordinates(
                        tile,
                        map::is_flipped_diagonally(raw_id),
                        map::is_flipped_horizontally(raw_id),
                        map::is_flipped_vertically(raw_id),
                        settings.texel_bias,
                    );

                    group
                        .faces
                        .push(register_face(vertex_store.as_mut(), &mut uv_store, &corners, &uvs));
                }
            }

            groups.push(group);
        }
    }

    for object in &map.object_meshes {
        info!(group = %object.name, "writing tile-object face group");
        let Some(tile) = map.tile(object.tile_id) else {
            bail!(
                "tile object '{}' references unknown tile id {}",
                object.name,
                object.tile_id
            );
        };

        // Tile objects carry no depth of their own; their container applies it.
        let corners = FaceCorners {
            points: face_corners_for_object(tile.size, object.offset),
            depth: 0.0,
        };
        let uvs = face_texture_coordinates(tile, false, false, false, settings.texel_bias);
        let face = register_face(vertex_store.as_mut(), &mut uv_store, &corners, &uvs);

        groups.push(FaceGroup {
            name: object.name.clone(),
            faces: vec![face],
        });
    }

    Ok(MeshDocument {
        vertices: vertex_store.values().to_vec(),
        uvs: uv_store.values().to_vec(),
        groups,
    })
}

/// Cell indices along one axis, ascending when the draw order is +1,
/// reversed otherwise.
fn axis_range(len: u32, draw_order: i32) -> Vec<u32> {
    if draw_order == 1 {
        (0..len).collect()
    } else {
        (0..len).rev().collect()
    }
}

fn register_face(
    vertex_store: &mut dyn IndexStore<Vertex3>,
    uv_store: &mut DedupStore<Uv>,
    corners: &FaceCorners,
    uvs: &[Uv; 4],
) -> Face {
    let mut indices = [(0usize, 0usize); 4];
    for (i, slot) in indices.iter_mut().enumerate() {
        *slot = (vertex_store.add(corners.vertex(i)), uv_store.add(uvs[i]));
    }
    Face { corners: indices }
}
