//! `Mesh`: deterministic triangulated-surface store.
//!
//! A `Mesh` owns two buffers: per-vertex 32-bit flag words and faces as
//! triples of vertex indices. Vertices and faces are identified purely by
//! their dense, 0-based position in those buffers.
//!
//! # Invariants
//!
//! - `vertex_count <= vertex_capacity` and `face_count <= face_capacity`.
//! - Every face accepted by [`Mesh::add_face`] references vertices below the
//!   vertex count at the time of insertion.
//! - New vertices always append at the current count with flags zero; no
//!   slot is ever reused mid-sequence.
//!
//! Identifiers are positional and ephemeral: [`Mesh::remove_face`] relabels
//! the swapped-in survivor, and [`apply_permutation`] relabels every vertex.
//! Callers holding face ids across a removal must account for the swap rule.
//! There is no vertex removal in this scaffold.
//!
//! [`apply_permutation`]: crate::permutation::apply_permutation

use crate::mesh_error::MeshError;
use crate::storage::GrowBuf;
use serde::{Deserialize, Serialize};

/// Triangulated-surface container: vertex flags plus face index triples.
///
/// Serde serialization covers the *logical* state only (counts and the live
/// prefix of each buffer); capacity is a reservation, not state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "MeshState", into = "MeshState")]
pub struct Mesh {
    vertex_count: u32,
    face_count: u32,
    vertex_flags: GrowBuf<u32>,
    faces: GrowBuf<[u32; 3]>,
}

/// Logical-state shadow of [`Mesh`] used for serde.
#[derive(Serialize, Deserialize)]
struct MeshState {
    vertex_flags: Vec<u32>,
    faces: Vec<[u32; 3]>,
}

impl From<Mesh> for MeshState {
    fn from(mesh: Mesh) -> Self {
        Self {
            vertex_flags: mesh.vertex_flags().to_vec(),
            faces: mesh.faces().to_vec(),
        }
    }
}

impl From<MeshState> for Mesh {
    fn from(state: MeshState) -> Self {
        Mesh::from_parts(state.vertex_flags, state.faces)
    }
}

impl Mesh {
    /// Empty mesh; allocates nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with capacity pre-grown for `vertex_reserve` vertices and
    /// `face_reserve` faces. Reserves go through the doubling growth engine,
    /// so the granted capacity may exceed the request.
    ///
    /// # Errors
    /// `OutOfMemory` if either reservation fails; no mesh is produced.
    pub fn with_capacity(vertex_reserve: u32, face_reserve: u32) -> Result<Self, MeshError> {
        let mut mesh = Self::new();
        if vertex_reserve > 0 {
            mesh.vertex_flags.ensure_capacity(vertex_reserve as usize)?;
        }
        if face_reserve > 0 {
            mesh.faces.ensure_capacity(face_reserve as usize)?;
        }
        Ok(mesh)
    }

    /// Rebuild a mesh whose logical counts equal its capacities (no slack).
    /// Used by the canonical decoder and the serde shadow; the caller is
    /// responsible for the face indices being meaningful.
    pub(crate) fn from_parts(vertex_flags: Vec<u32>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            vertex_count: vertex_flags.len() as u32,
            face_count: faces.len() as u32,
            vertex_flags: GrowBuf::from_vec(vertex_flags),
            faces: GrowBuf::from_vec(faces),
        }
    }

    /// Current logical vertex count.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Current logical face count.
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Allocated vertex capacity (always ≥ the vertex count).
    pub fn vertex_capacity(&self) -> u32 {
        self.vertex_flags.capacity() as u32
    }

    /// Allocated face capacity (always ≥ the face count).
    pub fn face_capacity(&self) -> u32 {
        self.faces.capacity() as u32
    }

    /// Live vertex flags, one word per vertex, index order.
    pub fn vertex_flags(&self) -> &[u32] {
        &self.vertex_flags.as_slice()[..self.vertex_count as usize]
    }

    /// Live faces as `(a, b, c)` index triples, face-index order.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces.as_slice()[..self.face_count as usize]
    }

    /// Append a vertex with flags zero and return its index (the old count).
    ///
    /// # Errors
    /// `OutOfMemory` if the vertex buffer cannot grow; the mesh is unchanged.
    pub fn add_vertex(&mut self) -> Result<u32, MeshError> {
        let need = self.vertex_count as usize + 1;
        self.vertex_flags.ensure_capacity(need)?;
        let vid = self.vertex_count;
        self.vertex_flags.as_mut_slice()[vid as usize] = 0;
        self.vertex_count += 1;
        Ok(vid)
    }

    /// Overwrite the flags word of vertex `vid`.
    ///
    /// # Errors
    /// `VertexNotFound` if `vid` is at or beyond the current vertex count.
    pub fn set_vertex_flag(&mut self, vid: u32, flags: u32) -> Result<(), MeshError> {
        if vid >= self.vertex_count {
            return Err(MeshError::VertexNotFound {
                vid,
                count: self.vertex_count,
            });
        }
        self.vertex_flags.as_mut_slice()[vid as usize] = flags;
        Ok(())
    }

    /// Read the flags word of vertex `vid`.
    ///
    /// # Errors
    /// `VertexNotFound` if `vid` is at or beyond the current vertex count.
    pub fn vertex_flag(&self, vid: u32) -> Result<u32, MeshError> {
        if vid >= self.vertex_count {
            return Err(MeshError::VertexNotFound {
                vid,
                count: self.vertex_count,
            });
        }
        Ok(self.vertex_flags.as_slice()[vid as usize])
    }

    /// Append the face `(v0, v1, v2)` and return its index.
    ///
    /// Degenerate faces (repeated indices) are accepted here; only
    /// [`check_consistency`](crate::validation::check_consistency) flags
    /// them. Bounds are checked before any capacity growth, so a rejected
    /// face never allocates.
    ///
    /// # Errors
    /// `FaceVertexOutOfRange` if any index is ≥ the vertex count;
    /// `OutOfMemory` if the face buffer cannot grow.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) -> Result<u32, MeshError> {
        for index in [v0, v1, v2] {
            if index >= self.vertex_count {
                return Err(MeshError::FaceVertexOutOfRange {
                    index,
                    count: self.vertex_count,
                });
            }
        }
        let need = self.face_count as usize + 1;
        self.faces.ensure_capacity(need)?;
        let fid = self.face_count;
        self.faces.as_mut_slice()[fid as usize] = [v0, v1, v2];
        self.face_count += 1;
        Ok(fid)
    }

    /// Remove face `fid` by swap-removal: unless `fid` is the last face, the
    /// last face's triple overwrites slot `fid`, so the face formerly at the
    /// last position takes identifier `fid`. O(1), keeps the sequence dense,
    /// and is the exact rule downstream serialized state depends on.
    ///
    /// # Errors
    /// `FaceNotFound` if `fid` is at or beyond the current face count.
    pub fn remove_face(&mut self, fid: u32) -> Result<(), MeshError> {
        if fid >= self.face_count {
            return Err(MeshError::FaceNotFound {
                fid,
                count: self.face_count,
            });
        }
        let last = self.face_count - 1;
        if fid != last {
            let moved = self.faces.as_slice()[last as usize];
            self.faces.as_mut_slice()[fid as usize] = moved;
        }
        self.face_count = last;
        Ok(())
    }

    /// Rewrite every face's indices through `perm`, in face order. Each face
    /// is bounds-rechecked against `perm.len()` before its rewrite, so a bad
    /// face aborts with earlier faces already committed (the permutation
    /// engine documents this ordering).
    pub(crate) fn relabel_faces(&mut self, perm: &[u32]) -> Result<(), MeshError> {
        let n = perm.len() as u32;
        for fid in 0..self.face_count as usize {
            let [a, b, c] = self.faces.as_slice()[fid];
            for index in [a, b, c] {
                if index >= n {
                    return Err(MeshError::FaceVertexOutOfRange { index, count: n });
                }
            }
            self.faces.as_mut_slice()[fid] =
                [perm[a as usize], perm[b as usize], perm[c as usize]];
        }
        Ok(())
    }

    /// Build a fresh zeroed flags array at the current vertex capacity,
    /// scatter old vertex `i`'s word to `perm[i]`, then swap the array in
    /// whole. The live flags are untouched until the swap.
    pub(crate) fn scatter_vertex_flags(&mut self, perm: &[u32]) -> Result<(), MeshError> {
        let capacity = self.vertex_flags.capacity();
        let mut new_flags = Vec::new();
        new_flags
            .try_reserve_exact(capacity)
            .map_err(|_| MeshError::OutOfMemory { requested: capacity })?;
        new_flags.resize(capacity, 0u32);
        for (i, &target) in perm.iter().enumerate() {
            if target as usize >= capacity {
                return Err(MeshError::PermutationTargetOutOfRange {
                    index: i,
                    target,
                    bound: capacity,
                });
            }
            new_flags[target as usize] = self.vertex_flags.as_slice()[i];
        }
        self.vertex_flags.replace(new_flags);
        Ok(())
    }

    /// Append a copy of `block`'s vertices (flags verbatim) and faces (every
    /// index shifted by this mesh's pre-append vertex count). Returns the
    /// index of the first appended face.
    ///
    /// `attach_v0` and `attach_v1` are reserved edge-identification hooks:
    /// accepted for interface compatibility, currently ignored. No vertex
    /// deduplication or edge welding occurs.
    ///
    /// # Errors
    /// `OutOfMemory` if any underlying append fails. The attach is not
    /// atomic: appends completed before the failure remain, leaving the mesh
    /// valid but only partially extended.
    pub fn attach_local_block(
        &mut self,
        block: &Mesh,
        attach_v0: u32,
        attach_v1: u32,
    ) -> Result<u32, MeshError> {
        let _ = (attach_v0, attach_v1);
        let vertex_base = self.vertex_count;
        for i in 0..block.vertex_count {
            let vid = self.add_vertex()?;
            self.vertex_flags.as_mut_slice()[vid as usize] =
                block.vertex_flags.as_slice()[i as usize];
        }
        let face_start = self.face_count;
        for &[a, b, c] in block.faces() {
            self.add_face(a + vertex_base, b + vertex_base, c + vertex_base)?;
        }
        log::debug!(
            "attached block: {} vertices, {} faces at base {vertex_base}, faces from {face_start}",
            block.vertex_count,
            block.face_count
        );
        Ok(face_start)
    }
}
