//! Mesh export subsystem: tile faces accumulated into an indexed quad mesh
//! and serialized as Wavefront OBJ text.

pub mod builder;
pub mod geometry;
pub mod obj_writer;
pub mod store;
pub mod texcoords;

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

// ============================================================================
// Value types
// ============================================================================

/// A position in output model space.
///
/// Equality and hashing are bit-exact over all three components, so
/// positions differing by any rounding error never deduplicate into one.
#[derive(Debug, Clone, Copy)]
pub struct Vertex3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq for Vertex3 {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl Eq for Vertex3 {}

impl Hash for Vertex3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.x.to_bits());
        state.write_u32(self.y.to_bits());
        state.write_u32(self.z.to_bits());
    }
}

/// A texture coordinate, bit-exact like [`Vertex3`].
#[derive(Debug, Clone, Copy)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl PartialEq for Uv {
    fn eq(&self, other: &Self) -> bool {
        self.u.to_bits() == other.u.to_bits() && self.v.to_bits() == other.v.to_bits()
    }
}

impl Eq for Uv {}

impl Hash for Uv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.u.to_bits());
        state.write_u32(self.v.to_bits());
    }
}

// ============================================================================
// Document structures
// ============================================================================

/// One quad face: four (vertex index, uv index) pairs into the document
/// stores, in CCW order. The normal index is implicit; the whole document
/// shares a single constant normal.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub corners: [(usize, usize); 4],
}

/// A named, insertion-ordered run of faces.
#[derive(Debug, Clone)]
pub struct FaceGroup {
    pub name: String,
    pub faces: Vec<Face>,
}

/// The finished export: indexed vertex and uv stores plus face groups, in
/// the order the builder encountered them.
#[derive(Debug, Clone)]
pub struct MeshDocument {
    pub vertices: Vec<Vertex3>,
    pub uvs: Vec<Uv>,
    pub groups: Vec<FaceGroup>,
}

/// Summary counts of a finished export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStats {
    pub vertex_count: usize,
    pub uv_count: usize,
    pub group_count: usize,
    pub face_count: usize,
}

impl ExportStats {
    pub fn of(doc: &MeshDocument) -> Self {
        Self {
            vertex_count: doc.vertices.len(),
            uv_count: doc.uvs.len(),
            group_count: doc.groups.len(),
            face_count: doc.groups.iter().map(|g| g.faces.len()).sum(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_equality_is_bit_exact() {
        let a = Vertex3 { x: 0.0, y: 1.0, z: 2.0 };
        let b = Vertex3 { x: 0.0, y: 1.0, z: 2.0 };
        assert_eq!(a, b);

        // -0.0 == 0.0 numerically but has a different bit pattern
        let neg = Vertex3 { x: -0.0, y: 1.0, z: 2.0 };
        assert_ne!(a, neg);
    }

    #[test]
    fn stats_count_faces_across_groups() {
        let face = Face { corners: [(0, 0); 4] };
        let doc = MeshDocument {
            vertices: vec![Vertex3 { x: 0.0, y: 0.0, z: 0.0 }],
            uvs: vec![Uv { u: 0.0, v: 0.0 }],
            groups: vec![
                FaceGroup { name: "a".to_string(), faces: vec![face, face] },
                FaceGroup { name: "b".to_string(), faces: vec![face] },
            ],
        };
        let stats = ExportStats::of(&doc);
        assert_eq!(stats.vertex_count, 1);
        assert_eq!(stats.uv_count, 1);
        assert_eq!(stats.group_count, 2);
        assert_eq!(stats.face_count, 3);
    }
}
