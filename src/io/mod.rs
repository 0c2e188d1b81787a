//! Mesh codec: canonical binary format and the debug text exporter.
//!
//! The core never opens files or knows about paths; everything here works
//! against caller-supplied `std::io::Read` / `std::io::Write` streams. The
//! binary layout in [`canonical`] is the crate's compatibility contract;
//! the text dump in [`face_list`] is diagnostic only.

pub mod canonical;
pub mod face_list;

pub use canonical::{
    CANONICAL_MAGIC, canonical_byte_len, deserialize_canonical, serialize_canonical,
};
pub use face_list::export_face_list_text;
