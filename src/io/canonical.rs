//! Fixed, versioned, little-endian canonical encoding of a mesh.
//!
//! Layout (no padding, all integers little-endian regardless of host order):
//!
//! ```text
//! offset 0       : 8 bytes  magic "TOPOC001"
//! offset 8       : u32      vertex_count
//! offset 12      : u32      face_count
//! offset 16      : u32[vertex_count]   vertex flags, index order
//! offset 16+4*VC : u32[face_count*3]   face indices (a,b,c), face order
//! ```
//!
//! Total size = 16 + 4·vertex_count + 12·face_count bytes. This layout is
//! the compatibility contract: any reimplementation must reproduce it
//! byte-for-byte. We store integers pre-LE with `.to_le()` and decode with
//! `u32::from_le`, casting whole buffers through `bytemuck`.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use bytemuck::{Pod, Zeroable};
use std::io::{Read, Write};
use std::mem::{align_of, size_of};

/// Magic tag identifying the format and version.
pub const CANONICAL_MAGIC: [u8; 8] = *b"TOPOC001";

/// On-disk header: magic followed by the two logical counts.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CanonicalHeader {
    magic: [u8; 8],
    vertex_count_le: u32,
    face_count_le: u32,
}

const _: () = {
    assert!(size_of::<CanonicalHeader>() == 16);
    assert!(align_of::<CanonicalHeader>() == 4);
};

/// Encoded size in bytes of `mesh`'s canonical form.
pub fn canonical_byte_len(mesh: &Mesh) -> usize {
    size_of::<CanonicalHeader>()
        + 4 * mesh.vertex_count() as usize
        + 12 * mesh.face_count() as usize
}

/// Write `mesh`'s logical state to `writer` in the canonical layout.
///
/// # Errors
/// Any sink failure aborts with the I/O kind. Partial output already written
/// to the sink is not rolled back; truncation is the caller's concern.
pub fn serialize_canonical<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), MeshError> {
    let header = CanonicalHeader {
        magic: CANONICAL_MAGIC,
        vertex_count_le: mesh.vertex_count().to_le(),
        face_count_le: mesh.face_count().to_le(),
    };
    writer.write_all(bytemuck::bytes_of(&header))?;
    let flags_le: Vec<u32> = mesh.vertex_flags().iter().map(|v| v.to_le()).collect();
    writer.write_all(bytemuck::cast_slice(&flags_le))?;
    let faces_le: Vec<u32> = mesh
        .faces()
        .iter()
        .flatten()
        .map(|v| v.to_le())
        .collect();
    writer.write_all(bytemuck::cast_slice(&faces_le))?;
    Ok(())
}

/// Read one canonical mesh from `reader`.
///
/// The magic is checked before anything else is consumed; a stream that does
/// not begin with `"TOPOC001"` is rejected without interpreting any further
/// bytes. The returned mesh has capacity == count for both buffers.
///
/// # Errors
/// `BadMagic` on a tag mismatch, the I/O kind on any short read, and
/// `OutOfMemory` if a buffer for the declared counts cannot be allocated.
/// No partially constructed mesh ever escapes.
pub fn deserialize_canonical<R: Read>(reader: &mut R) -> Result<Mesh, MeshError> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if magic != CANONICAL_MAGIC {
        return Err(MeshError::BadMagic {
            expected: CANONICAL_MAGIC,
            found: magic,
        });
    }
    let vertex_count = read_u32_le(reader)?;
    let face_count = read_u32_le(reader)?;

    let mut flags: Vec<u32> = alloc_zeroed(vertex_count as usize)?;
    reader.read_exact(bytemuck::cast_slice_mut(&mut flags))?;
    for word in &mut flags {
        *word = u32::from_le(*word);
    }

    let mut faces: Vec<[u32; 3]> = alloc_zeroed(face_count as usize)?;
    reader.read_exact(bytemuck::cast_slice_mut(&mut faces))?;
    for face in &mut faces {
        for word in face {
            *word = u32::from_le(*word);
        }
    }

    Ok(Mesh::from_parts(flags, faces))
}

fn read_u32_le<R: Read>(reader: &mut R) -> Result<u32, MeshError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Fallible zeroed allocation: counts come from the wire, so an absurd value
/// must surface as `OutOfMemory` rather than abort.
fn alloc_zeroed<T: Zeroable + Clone>(len: usize) -> Result<Vec<T>, MeshError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| MeshError::OutOfMemory { requested: len })?;
    buf.resize(len, T::zeroed());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(CanonicalHeader, [u8; 16]);

    fn sample_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        for _ in 0..4 {
            mesh.add_vertex().unwrap();
        }
        mesh.set_vertex_flag(0, 0x01).unwrap();
        mesh.set_vertex_flag(3, 0xdead_beef).unwrap();
        mesh.add_face(0, 1, 2).unwrap();
        mesh.add_face(1, 2, 3).unwrap();
        mesh
    }

    #[test]
    fn byte_layout_is_exact() {
        let mesh = sample_mesh();
        let mut bytes = Vec::new();
        serialize_canonical(&mut bytes, &mesh).unwrap();
        assert_eq!(bytes.len(), canonical_byte_len(&mesh));
        assert_eq!(&bytes[0..8], b"TOPOC001");
        assert_eq!(&bytes[8..12], &4u32.to_le_bytes());
        assert_eq!(&bytes[12..16], &2u32.to_le_bytes());
        // First flag word and the full first face triple.
        assert_eq!(&bytes[16..20], &0x01u32.to_le_bytes());
        assert_eq!(&bytes[28..32], &0xdead_beefu32.to_le_bytes());
        assert_eq!(&bytes[32..36], &0u32.to_le_bytes());
        assert_eq!(&bytes[36..40], &1u32.to_le_bytes());
        assert_eq!(&bytes[40..44], &2u32.to_le_bytes());
    }

    #[test]
    fn round_trip_preserves_logical_state() {
        let mesh = sample_mesh();
        let mut bytes = Vec::new();
        serialize_canonical(&mut bytes, &mesh).unwrap();
        let loaded = deserialize_canonical(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded.vertex_count(), mesh.vertex_count());
        assert_eq!(loaded.face_count(), mesh.face_count());
        assert_eq!(loaded.vertex_flags(), mesh.vertex_flags());
        assert_eq!(loaded.faces(), mesh.faces());
        // Loaded meshes carry no slack.
        assert_eq!(loaded.vertex_capacity(), loaded.vertex_count());
        assert_eq!(loaded.face_capacity(), loaded.face_count());
    }

    #[test]
    fn bad_magic_is_rejected_before_counts() {
        let bytes = b"NOTAMESH\x04\x00\x00\x00\x02\x00\x00\x00";
        let mut reader = bytes.as_slice();
        let err = deserialize_canonical(&mut reader).unwrap_err();
        assert!(matches!(err, MeshError::BadMagic { .. }));
        // Only the 8 magic bytes were consumed.
        assert_eq!(reader.len(), 8);
    }

    #[test]
    fn short_read_yields_io_error() {
        let mesh = sample_mesh();
        let mut bytes = Vec::new();
        serialize_canonical(&mut bytes, &mesh).unwrap();
        bytes.truncate(bytes.len() - 1);
        let err = deserialize_canonical(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(err, MeshError::Io(_)));
    }

    #[test]
    fn empty_mesh_encodes_to_header_only() {
        let mesh = Mesh::new();
        let mut bytes = Vec::new();
        serialize_canonical(&mut bytes, &mesh).unwrap();
        assert_eq!(bytes.len(), 16);
        let loaded = deserialize_canonical(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded.vertex_count(), 0);
        assert_eq!(loaded.face_count(), 0);
    }
}
