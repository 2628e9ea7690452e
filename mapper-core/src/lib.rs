#![cfg_attr(not(test), no_std)]

//! Mapper Core - cursor and element definitions for typed mapped files
//!
//! This crate holds everything about a typed memory-mapped array that needs
//! no operating system: the element constraint, random-access cursors and
//! their reverse adapter, the free-function adapters and range algorithms
//! built on them, and size/bounds validation.

pub mod adapters;
pub mod algorithm;
pub mod cursor;
pub mod error;
pub mod traits;
pub mod validation;

pub use adapters::{advance, distance, next, prev, span, Span};
pub use cursor::{Access, ConstCursor, Cursor, MutCursor, ReadOnly, ReadWrite, Rev};
pub use error::*;
pub use traits::{MapElement, RandomAccessCursor, WritableCursor};
pub use validation::{byte_len, check_index, element_count, typed_prefix, typed_prefix_mut};
