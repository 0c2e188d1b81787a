//! # topo-mesh
//!
//! topo-mesh is a minimal, deterministic container for a triangulated
//! surface: a growable array of vertices (each carrying an opaque 32-bit
//! flag word) and a growable array of triangular faces (each a triple of
//! vertex indices), together with a fixed canonical binary encoding of that
//! state.
//!
//! ## Features
//! - [`Mesh`](mesh::Mesh): vertex/face storage with geometric-doubling
//!   growth, swap-removal face deletion, and append-only block attach
//! - Vertex relabeling via explicit caller-supplied permutations
//! - A read-only consistency checker
//! - The canonical little-endian binary codec plus a deterministic text
//!   exporter for debugging
//!
//! ## Determinism
//!
//! Every operation is synchronous and deterministic: equal call sequences
//! produce byte-identical canonical encodings, including after face
//! removals (the swap-removal rule is part of the contract).
//!
//! ## Scope
//!
//! No half-edge or adjacency topology, no vertex welding on block attach,
//! no stable face identifiers across deletion, no geometric computation,
//! and no internal locking — a `Mesh` is exclusively owned and `&mut`
//! exclusivity is the concurrency discipline.
//!
//! ## Usage
//!
//! ```rust
//! use topo_mesh::prelude::*;
//!
//! # fn try_main() -> Result<(), MeshError> {
//! let mut mesh = Mesh::with_capacity(8, 8)?;
//! let v0 = mesh.add_vertex()?;
//! let v1 = mesh.add_vertex()?;
//! let v2 = mesh.add_vertex()?;
//! mesh.add_face(v0, v1, v2)?;
//! check_consistency(&mesh)?;
//!
//! let mut bytes = Vec::new();
//! serialize_canonical(&mut bytes, &mesh)?;
//! let loaded = deserialize_canonical(&mut bytes.as_slice())?;
//! assert_eq!(loaded.faces(), mesh.faces());
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

// Re-export our major subsystems:
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod permutation;
pub mod storage;
pub mod validation;

/// A convenient prelude to import the most-used types & functions:
pub mod prelude {
    pub use crate::io::{
        CANONICAL_MAGIC, canonical_byte_len, deserialize_canonical, export_face_list_text,
        serialize_canonical,
    };
    pub use crate::mesh::Mesh;
    pub use crate::mesh_error::{MeshError, MeshErrorKind};
    pub use crate::permutation::{apply_permutation, invert_permutation};
    pub use crate::validation::check_consistency;
}
