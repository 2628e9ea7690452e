//! Mapper - typed memory-mapped files with container semantics
//!
//! This library maps a file into memory and hands it back as a contiguous
//! array of a chosen element type, with checked and unchecked access,
//! explicit flushing and random-access cursors.
//!
//! ## Architecture
//!
//! - **mapper-core**: cursors, element constraint, range algorithms and
//!   validation (no I/O)
//! - **mapper**: the [`MappedFile`] container and everything that touches
//!   the file system
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mapper::{algorithm, map};
//!
//! fn example() -> mapper::Result<()> {
//!     // Create (or overwrite) a file holding 30 zeroed i32s and map it
//!     let mut numbers = map::<i32, _>("numbers.bin", 30)?;
//!     for i in 0..numbers.len() {
//!         numbers[i] = i as i32;
//!     }
//!
//!     // Sorting the reverse range leaves the file in descending order
//!     let (rbegin, rend) = numbers.rbounds_mut();
//!     algorithm::sort(rbegin, rend);
//!     numbers.flush()?;
//!
//!     // Map the existing file again as-is
//!     let again = map::<i32, _>("numbers.bin", 0)?;
//!     assert_eq!(*again.at(0)?, 29);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Shared read-write mapping**: writes land in the file's page cache
//! - **Eager population**: pages are pre-faulted at map time by default
//! - **Cursors**: forward and reverse, read-only and read-write, with
//!   `advance`/`distance`/`next`/`prev`
//! - **serde**: [`MapOptions`] can be (de)serialized

pub use mapper_core::{
    // Cursors and adapters
    advance, distance, next, prev, span, ConstCursor, Cursor, MutCursor, Rev, Span,
    // Traits
    MapElement, RandomAccessCursor, WritableCursor,
    // Errors
    CoreError,
};
pub use mapper_core::algorithm;

pub mod config;
pub mod error;
pub mod mapped_file;

pub use config::MapOptions;
pub use error::{Error, ErrorCategory, Result};
pub use mapped_file::MappedFile;

use std::path::Path;

/// Map `path` as an array of `T`
///
/// With `element_count == 0` the existing file is mapped as-is and a
/// missing file is an [`Error::Open`]. Otherwise the file is created or
/// overwritten with `element_count` zeroed elements first; failing to do
/// that is also an [`Error::Open`].
pub fn map<T: MapElement, P: AsRef<Path>>(path: P, element_count: usize) -> Result<MappedFile<T>> {
    MapOptions::new().create(element_count).open(path)
}

/// Map `path` as raw bytes
pub fn map_bytes<P: AsRef<Path>>(path: P, byte_count: usize) -> Result<MappedFile<u8>> {
    map(path, byte_count)
}
