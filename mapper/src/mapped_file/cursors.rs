//! Cursor accessors for mapped files
//!
//! Read-only cursors borrow the mapping shared, so any number of them can be
//! held at once. Read-write cursors borrow it exclusively; since a second
//! exclusive borrow cannot coexist with the first, the mutable range ends
//! are handed out together.

use super::MappedFile;
use mapper_core::{ConstCursor, MapElement, MutCursor, Rev};

impl<T: MapElement> MappedFile<T> {
    /// Cursor at the first element
    ///
    /// On an empty mapping this equals [`end`](Self::end).
    pub fn begin(&self) -> ConstCursor<'_, T> {
        ConstCursor::from_slice(self.as_slice())
    }

    /// Cursor one past the last element
    pub fn end(&self) -> ConstCursor<'_, T> {
        self.begin() + self.len as isize
    }

    /// Reverse cursor at the last element
    pub fn rbegin(&self) -> Rev<ConstCursor<'_, T>> {
        Rev::new(self.end())
    }

    /// Reverse cursor one before the first element
    pub fn rend(&self) -> Rev<ConstCursor<'_, T>> {
        Rev::new(self.begin())
    }

    pub fn begin_mut(&mut self) -> MutCursor<'_, T> {
        MutCursor::from_mut_slice(self.as_mut_slice())
    }

    pub fn end_mut(&mut self) -> MutCursor<'_, T> {
        let len = self.len as isize;
        self.begin_mut() + len
    }

    /// Read-write `(begin, end)` pair
    pub fn bounds_mut(&mut self) -> (MutCursor<'_, T>, MutCursor<'_, T>) {
        let len = self.len as isize;
        let begin = self.begin_mut();
        (begin, begin + len)
    }

    /// Read-write `(rbegin, rend)` pair
    pub fn rbounds_mut(&mut self) -> (Rev<MutCursor<'_, T>>, Rev<MutCursor<'_, T>>) {
        let (begin, end) = self.bounds_mut();
        (Rev::new(end), Rev::new(begin))
    }
}
