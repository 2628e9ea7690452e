//! Random-access cursor interfaces
//!
//! These traits are what the free-function adapters and the range
//! algorithms are written against, so forward cursors and their reverse
//! adapters interoperate with the same code.

/// A copyable position into a contiguous region
///
/// Implementors behave like a pointer: moving past either end is allowed,
/// reading there is not.
pub trait RandomAccessCursor: Copy + Ord {
    /// The element type read through this cursor
    type Item: Copy;

    /// Return the cursor moved by `n` elements (negative moves backward)
    fn offset(self, n: isize) -> Self;

    /// Signed number of elements from `origin` to `self`
    fn distance_from(self, origin: Self) -> isize;

    /// Read the element at the current position
    ///
    /// Panics if the position is outside the region.
    fn read(self) -> Self::Item;
}

/// A cursor through which elements can also be written
pub trait WritableCursor: RandomAccessCursor {
    /// Overwrite the element at the current position
    fn write(self, value: Self::Item);

    /// Exchange the elements at two positions
    fn swap(self, other: Self) {
        let a = self.read();
        let b = other.read();
        self.write(b);
        other.write(a);
    }
}
