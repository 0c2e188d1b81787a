//! Mesh consistency validation.
//!
//! Read-only structural checks over a [`Mesh`], in the style of a lightweight
//! post-mutation audit. The checks run in a fixed enumeration order and the
//! first violation wins.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;

/// Verify the mesh's structural invariants:
///
/// 1. vertex count ≤ vertex capacity,
/// 2. face count ≤ face capacity,
/// 3. every face index is below the vertex count,
/// 4. no face repeats a vertex index (degenerate).
///
/// Degenerate faces are legal to *add*; this pass is where they surface.
/// No mutation occurs.
pub fn check_consistency(mesh: &Mesh) -> Result<(), MeshError> {
    if mesh.vertex_count() > mesh.vertex_capacity() {
        return Err(MeshError::CountExceedsCapacity {
            what: "vertex",
            count: mesh.vertex_count(),
            capacity: mesh.vertex_capacity(),
        });
    }
    if mesh.face_count() > mesh.face_capacity() {
        return Err(MeshError::CountExceedsCapacity {
            what: "face",
            count: mesh.face_count(),
            capacity: mesh.face_capacity(),
        });
    }
    let vertex_count = mesh.vertex_count();
    for (fid, &[a, b, c]) in mesh.faces().iter().enumerate() {
        for index in [a, b, c] {
            if index >= vertex_count {
                return Err(MeshError::FaceVertexOutOfRange {
                    index,
                    count: vertex_count,
                });
            }
        }
        if a == b || b == c || c == a {
            return Err(MeshError::DegenerateFace {
                fid: fid as u32,
                a,
                b,
                c,
            });
        }
    }
    Ok(())
}
