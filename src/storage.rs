//! Growable zero-filled buffer backing the mesh's vertex and face arrays.
//!
//! `GrowBuf` is a thin wrapper over `Vec` that keeps its entire capacity
//! materialized and zero-filled, so the logical count lives with the owner
//! (the mesh) and any slot below capacity is always readable. Growth is
//! geometric and fallible: a failed allocation surfaces as
//! [`MeshError::OutOfMemory`] and leaves the previous contents and capacity
//! untouched.
//!
//! # Growth policy
//!
//! This is a behavioral contract, not an implementation detail: a buffer at
//! zero capacity first grows to [`INITIAL_CAPACITY`]; a non-empty buffer
//! doubles, repeatedly, until the requirement is met. A single bulk append
//! may therefore cross several doublings in one call.

use crate::mesh_error::MeshError;
use core::fmt::{self, Debug};

/// First capacity granted to an empty buffer.
pub const INITIAL_CAPACITY: usize = 16;

/// Doubling-capacity buffer; every slot below `capacity()` is initialized.
#[derive(Clone, Default)]
pub struct GrowBuf<V> {
    data: Vec<V>,
}

impl<V> Debug for GrowBuf<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowBuf")
            .field("capacity", &self.data.len())
            .finish()
    }
}

impl<V: Clone + Default> GrowBuf<V> {
    /// Empty buffer with zero capacity; never allocates.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Buffer whose capacity is exactly `elements.len()`, no slack. Used by
    /// the canonical decoder, which loads capacity == count.
    pub fn from_vec(elements: Vec<V>) -> Self {
        Self { data: elements }
    }

    /// Allocated capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Grow so that `capacity() >= min_cap`, zero-filling the newly exposed
    /// tail and preserving everything already written.
    ///
    /// # Errors
    /// Returns `Err(OutOfMemory)` if the allocation cannot be satisfied; the
    /// buffer is left exactly as it was.
    pub fn ensure_capacity(&mut self, min_cap: usize) -> Result<(), MeshError> {
        let cap = self.data.len();
        if cap >= min_cap {
            return Ok(());
        }
        let mut new_cap = if cap == 0 { INITIAL_CAPACITY } else { cap * 2 };
        while new_cap < min_cap {
            new_cap *= 2;
        }
        self.data
            .try_reserve_exact(new_cap - cap)
            .map_err(|_| MeshError::OutOfMemory { requested: new_cap })?;
        // Reserve succeeded; resize cannot allocate further.
        self.data.resize(new_cap, V::default());
        log::trace!("grew buffer capacity {cap} -> {new_cap}");
        Ok(())
    }

    /// Entire capacity as a read-only slice.
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    /// Entire capacity as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.data
    }

    /// Replace the backing storage wholesale. The permutation engine builds
    /// a fully validated replacement and swaps it in with this.
    pub fn replace(&mut self, elements: Vec<V>) {
        self.data = elements;
    }
}
