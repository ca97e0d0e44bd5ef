//! Wavefront OBJ text writer.
//!
//! Serializes a finished [`MeshDocument`] in a fixed layout:
//! - header comment
//! - vertex count comment, one `v x y z` line per stored vertex
//! - uv count comment, one `vt u v` line per stored uv
//! - the single shared normal `vn 0 0 -1`
//! - group count comment, then per group a blank line, `g <name>`, and one
//!   `f a/b/1 c/d/1 e/f/1 g/h/1` line per quad (indices 1-based)
//!
//! No sorting anywhere; the writer reproduces the builder's accumulation
//! order, which keeps the output byte-for-byte deterministic.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::MeshDocument;

/// Serialize the document into a writer.
pub fn write_obj<W: Write>(doc: &MeshDocument, out: &mut W) -> Result<()> {
    writeln!(out, "# Wavefront OBJ file automatically generated by tmx-mesh")?;
    writeln!(out)?;

    debug!("writing face vertices");
    writeln!(out, "# Vertices (Count = {})", doc.vertices.len())?;
    for v in &doc.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    writeln!(out)?;

    debug!("writing face uv coordinates");
    writeln!(out, "# Texture coordinates (Count = {})", doc.uvs.len())?;
    for uv in &doc.uvs {
        writeln!(out, "vt {} {}", uv.u, uv.v)?;
    }
    writeln!(out)?;

    // The single normal every face references.
    writeln!(out, "# Normal")?;
    writeln!(out, "vn 0 0 -1")?;
    writeln!(out)?;

    writeln!(out, "# Groups (Count = {})", doc.groups.len())?;
    for group in &doc.groups {
        writeln!(out)?;
        writeln!(out, "g {}", group.name)?;
        for face in &group.faces {
            let [c0, c1, c2, c3] = face.corners;
            writeln!(
                out,
                "f {}/{}/1 {}/{}/1 {}/{}/1 {}/{}/1",
                c0.0 + 1,
                c0.1 + 1,
                c1.0 + 1,
                c1.1 + 1,
                c2.0 + 1,
                c2.1 + 1,
                c3.0 + 1,
                c3.1 + 1
            )?;
        }
    }
    Ok(())
}

/// Serialize the document into a string.
pub fn obj_string(doc: &MeshDocument) -> Result<String> {
    let mut buf = Vec::new();
    write_obj(doc, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Serialize the document straight to a file.
pub fn write_obj_file(doc: &MeshDocument, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create OBJ: {}", path.display()))?;
    let mut w = std::io::BufWriter::new(file);
    write_obj(doc, &mut w)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Face, FaceGroup, Uv, Vertex3};

    fn tiny_doc() -> MeshDocument {
        MeshDocument {
            vertices: vec![
                Vertex3 { x: 0.0, y: 0.0, z: 0.0 },
                Vertex3 { x: 32.0, y: 0.0, z: 0.0 },
                Vertex3 { x: 32.0, y: -32.0, z: 0.0 },
                Vertex3 { x: 0.0, y: -32.0, z: 0.0 },
            ],
            uvs: vec![Uv { u: 0.0, v: 0.0 }, Uv { u: 0.25, v: 0.5 }],
            groups: vec![FaceGroup {
                name: "layer_0".to_string(),
                faces: vec![Face {
                    corners: [(0, 0), (1, 1), (2, 0), (3, 1)],
                }],
            }],
        }
    }

    #[test]
    fn layout_and_one_based_indices() {
        let text = obj_string(&tiny_doc()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("# Wavefront OBJ"));
        assert!(text.contains("# Vertices (Count = 4)"));
        assert!(text.contains("v 32 -32 0"));
        assert!(text.contains("# Texture coordinates (Count = 2)"));
        assert!(text.contains("vt 0.25 0.5"));
        assert!(text.contains("\nvn 0 0 -1\n"));
        assert!(text.contains("# Groups (Count = 1)"));
        assert!(text.contains("\ng layer_0\n"));
        assert!(text.contains("f 1/1/1 2/2/1 3/1/1 4/2/1"));
    }

    #[test]
    fn group_header_follows_blank_line() {
        let text = obj_string(&tiny_doc()).unwrap();
        assert!(text.contains("# Groups (Count = 1)\n\ng layer_0"));
    }

    #[test]
    fn file_writer_matches_string_form() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("map.obj");
        let doc = tiny_doc();

        write_obj_file(&doc, &path).unwrap();
        let from_file = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_file, obj_string(&doc).unwrap());
    }
}
