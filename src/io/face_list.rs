//! Deterministic face-list text export for debugging.
//!
//! Same index orders as the binary codec, so two equal meshes always produce
//! identical dumps. Not a supported re-import format.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use std::io::Write;

/// Write a human-readable dump of `mesh`: a vertex-count header, one line
/// per vertex with its index and flags, a face-count header, one line per
/// face with its three vertex indices.
pub fn export_face_list_text<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), MeshError> {
    writeln!(writer, "# vertices: {}", mesh.vertex_count())?;
    for (i, flags) in mesh.vertex_flags().iter().enumerate() {
        writeln!(writer, "v {i} flags {flags}")?;
    }
    writeln!(writer, "# faces: {}", mesh.face_count())?;
    for &[a, b, c] in mesh.faces() {
        writeln!(writer, "f {a} {b} {c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_deterministic_and_ordered() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.add_vertex().unwrap();
        }
        mesh.set_vertex_flag(1, 42).unwrap();
        mesh.add_face(0, 1, 2).unwrap();

        let mut first = Vec::new();
        export_face_list_text(&mut first, &mesh).unwrap();
        let text = String::from_utf8(first.clone()).unwrap();
        assert_eq!(
            text,
            "# vertices: 3\nv 0 flags 0\nv 1 flags 42\nv 2 flags 0\n# faces: 1\nf 0 1 2\n"
        );

        let mut second = Vec::new();
        export_face_list_text(&mut second, &mesh).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_mesh_dumps_headers_only() {
        let mut out = Vec::new();
        export_face_list_text(&mut out, &Mesh::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# vertices: 0\n# faces: 0\n");
    }
}
