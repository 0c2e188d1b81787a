//! Vertex relabeling via caller-supplied permutations.
//!
//! A permutation is a borrowed `&[u32]` of length equal to the mesh's vertex
//! count, mapping `perm[old] = new`. It is transient input: nothing here
//! stores it. Beyond bounds checks, [`apply_permutation`] does not verify
//! bijectivity; a non-bijective array silently overwrites or drops flags.
//! [`invert_permutation`] is the strict path: it detects non-bijective input
//! through its completeness scan.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;

/// Sentinel marking an unfilled slot during inversion.
const UNFILLED: u32 = u32::MAX;

/// Relabel every vertex of `mesh` through `perm`, rewriting each face's
/// indices to `perm[old]` and scattering vertex flags so old vertex `i`'s
/// word lands at position `perm[i]`.
///
/// Faces are rewritten and committed before the flags array is built and
/// validated. A failure raised during the flags step therefore leaves the
/// faces already relabeled; callers treating the whole operation as failed
/// should discard the mesh. On success the flags array is swapped in whole.
///
/// # Errors
/// - `PermutationLengthMismatch` if `perm.len()` differs from the vertex
///   count.
/// - `FaceVertexOutOfRange` if a face index is not covered by `perm`.
/// - `OutOfMemory` if the replacement flags array cannot be allocated.
/// - `PermutationTargetOutOfRange` if some `perm[i]` exceeds the allocated
///   vertex capacity (cannot happen for a true bijection into the count).
pub fn apply_permutation(mesh: &mut Mesh, perm: &[u32]) -> Result<(), MeshError> {
    let n = mesh.vertex_count() as usize;
    if perm.len() != n {
        return Err(MeshError::PermutationLengthMismatch {
            perm_len: perm.len(),
            count: mesh.vertex_count(),
        });
    }
    mesh.relabel_faces(perm)?;
    mesh.scatter_vertex_flags(perm)
}

/// Compute the inverse of `perm`: `inv[perm[i]] = i` for all `i`.
///
/// Pure; no mesh involved. The pass fills a sentinel-initialized array and
/// then scans for unfilled slots, so any non-injective or out-of-range input
/// is rejected by the end of the call.
///
/// # Errors
/// - `PermutationTargetOutOfRange` if any `perm[i] >= perm.len()`.
/// - `PermutationNotBijective` if some target index is never produced.
pub fn invert_permutation(perm: &[u32]) -> Result<Vec<u32>, MeshError> {
    let n = perm.len();
    let mut inv = vec![UNFILLED; n];
    for (i, &p) in perm.iter().enumerate() {
        if p as usize >= n {
            return Err(MeshError::PermutationTargetOutOfRange {
                index: i,
                target: p,
                bound: n,
            });
        }
        inv[p as usize] = i as u32;
    }
    for (target, &slot) in inv.iter().enumerate() {
        if slot == UNFILLED {
            return Err(MeshError::PermutationNotBijective { target });
        }
    }
    Ok(inv)
}
