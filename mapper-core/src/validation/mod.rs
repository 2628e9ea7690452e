//! Size and bounds validation for mapped arrays
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;

pub use bounds::{byte_len, check_index, element_count, typed_prefix, typed_prefix_mut};
