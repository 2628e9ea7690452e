//! Abstract interfaces shared by the mapped container and its cursors

pub mod cursor;
pub mod element;

pub use cursor::{RandomAccessCursor, WritableCursor};
pub use element::MapElement;
