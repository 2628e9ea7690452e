//! Element type constraints for mapped arrays
//!
//! This module defines the trait that constrains what types can be
//! laid over the bytes of a mapped file.

use bytemuck::Pod;

/// Trait for types that can be stored as elements of a mapped file
///
/// The file bytes are the element array verbatim, in host byte order, so
/// an element must be valid for every bit pattern (including all zeroes,
/// which is what a freshly created file holds) and carry no padding.
/// `bytemuck::Pod` states exactly that.
pub trait MapElement: Pod {
    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Get the required alignment of this element type
    fn align_bytes() -> usize {
        core::mem::align_of::<Self>()
    }
}

impl<T: Pod> MapElement for T {}
