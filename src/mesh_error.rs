//! `MeshError`: unified error type for topo-mesh public APIs.
//!
//! Every fallible operation in this crate reports through `MeshError` rather
//! than panicking. The variants are granular so callers can match on the
//! specific failure, and each variant classifies into one of four closed
//! result kinds (see [`MeshErrorKind`]): out-of-memory, invalid argument,
//! not-found, and I/O.

use thiserror::Error;

/// Unified error type for topo-mesh operations.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A buffer growth or allocation request could not be satisfied. The
    /// buffer that was being grown keeps its previous contents and capacity.
    #[error("allocation of {requested} elements failed")]
    OutOfMemory { requested: usize },
    /// A vertex index was syntactically valid but names no current vertex.
    #[error("vertex {vid} not found (vertex count is {count})")]
    VertexNotFound { vid: u32, count: u32 },
    /// A face index was syntactically valid but names no current face.
    #[error("face {fid} not found (face count is {count})")]
    FaceNotFound { fid: u32, count: u32 },
    /// A face referenced a vertex index at or beyond the current vertex count.
    #[error("face vertex index {index} out of range (vertex count is {count})")]
    FaceVertexOutOfRange { index: u32, count: u32 },
    /// A permutation's length did not match the mesh's vertex count.
    #[error("permutation length {perm_len} does not match vertex count {count}")]
    PermutationLengthMismatch { perm_len: usize, count: u32 },
    /// A permutation entry mapped outside the accepted target range.
    #[error("permutation entry perm[{index}] = {target} exceeds bound {bound}")]
    PermutationTargetOutOfRange {
        index: usize,
        target: u32,
        bound: usize,
    },
    /// A permutation left a target slot unfilled; the input is not surjective.
    #[error("permutation is not a bijection: target {target} is never produced")]
    PermutationNotBijective { target: usize },
    /// A logical count exceeded the buffer capacity backing it.
    #[error("{what} count {count} exceeds capacity {capacity}")]
    CountExceedsCapacity {
        what: &'static str,
        count: u32,
        capacity: u32,
    },
    /// A face repeats a vertex index.
    #[error("face {fid} is degenerate: indices ({a}, {b}, {c}) repeat a vertex")]
    DegenerateFace { fid: u32, a: u32, b: u32, c: u32 },
    /// The canonical decoder saw bytes that are not a "TOPOC001" stream.
    #[error("bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 8], found: [u8; 8] },
    /// A byte-sink or byte-source operation failed mid-codec.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// The closed taxonomy the granular variants classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshErrorKind {
    OutOfMemory,
    InvalidArgument,
    NotFound,
    Io,
}

impl MeshError {
    /// Classify this error into the closed result-kind taxonomy.
    pub fn kind(&self) -> MeshErrorKind {
        match self {
            MeshError::OutOfMemory { .. } => MeshErrorKind::OutOfMemory,
            MeshError::VertexNotFound { .. } | MeshError::FaceNotFound { .. } => {
                MeshErrorKind::NotFound
            }
            MeshError::FaceVertexOutOfRange { .. }
            | MeshError::PermutationLengthMismatch { .. }
            | MeshError::PermutationTargetOutOfRange { .. }
            | MeshError::PermutationNotBijective { .. }
            | MeshError::CountExceedsCapacity { .. }
            | MeshError::DegenerateFace { .. }
            | MeshError::BadMagic { .. } => MeshErrorKind::InvalidArgument,
            MeshError::Io(_) => MeshErrorKind::Io,
        }
    }
}
