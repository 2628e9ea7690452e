//! Random-access cursors over a contiguous mapped region
//!
//! A single [`Cursor`] type serves both read-only and read-write access;
//! the access mode is a type parameter, so the arithmetic and ordering are
//! written once and only dereferencing differs between the two.
//!
//! A cursor is a `(base, len, pos)` triple. Moving it anywhere is allowed
//! (pointer semantics), reading or writing through it is only allowed at
//! positions `0..len` and panics elsewhere.

mod reverse;

pub use reverse::Rev;

use crate::error::{CoreError, Result};
use crate::traits::{RandomAccessCursor, WritableCursor};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr::NonNull;

mod sealed {
    pub trait Sealed {}
}

/// Access mode of a cursor
pub trait Access: sealed::Sealed {}

/// Marker for cursors that only read
#[derive(Debug)]
pub enum ReadOnly {}

/// Marker for cursors that may also write
#[derive(Debug)]
pub enum ReadWrite {}

impl sealed::Sealed for ReadOnly {}
impl sealed::Sealed for ReadWrite {}
impl Access for ReadOnly {}
impl Access for ReadWrite {}

/// Copyable position into a region of `T`, bound to the borrow of that region
pub struct Cursor<'a, T, A: Access = ReadOnly> {
    base: NonNull<T>,
    len: usize,
    pos: isize,
    _marker: PhantomData<(&'a mut [T], A)>,
}

/// Read-only cursor
pub type ConstCursor<'a, T> = Cursor<'a, T, ReadOnly>;

/// Read-write cursor
pub type MutCursor<'a, T> = Cursor<'a, T, ReadWrite>;

impl<'a, T> Cursor<'a, T, ReadOnly> {
    /// Cursor at the first element of `slice`
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::from_non_null(NonNull::from(slice).cast(), slice.len())
    }

    /// Cursor at `ptr`, spanning `len` elements
    ///
    /// # Errors
    ///
    /// [`CoreError::NullCursor`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` elements for `'a`, and
    /// nothing may write to them during `'a`.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Result<Self> {
        let base = NonNull::new(ptr as *mut T).ok_or(CoreError::NullCursor)?;
        Ok(Self::from_non_null(base, len))
    }

    /// Reference to the current element, `None` outside the region
    pub fn get(self) -> Option<&'a T> {
        // SAFETY: index() bounds the position to 0..len of a live shared borrow
        self.index().map(|i| unsafe { &*self.base.as_ptr().add(i) })
    }
}

impl<'a, T> Cursor<'a, T, ReadWrite> {
    /// Cursor at the first element of `slice`
    pub fn from_mut_slice(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        Self::from_non_null(NonNull::from(slice).cast(), len)
    }

    /// Cursor at `ptr`, spanning `len` elements
    ///
    /// # Errors
    ///
    /// [`CoreError::NullCursor`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` elements for
    /// `'a`, and only cursors derived from this one may access them
    /// during `'a`.
    pub unsafe fn from_raw_parts_mut(ptr: *mut T, len: usize) -> Result<Self> {
        let base = NonNull::new(ptr).ok_or(CoreError::NullCursor)?;
        Ok(Self::from_non_null(base, len))
    }

    /// Overwrite the current element
    ///
    /// Panics if the position is outside the region.
    pub fn write(self, value: T) {
        // SAFETY: element_ptr() is in bounds; mutable cursors only access
        // the region through raw reads and writes, never through references
        unsafe { self.element_ptr().write(value) }
    }

    /// Overwrite the current element and return the previous value
    pub fn replace(self, value: T) -> T {
        // SAFETY: see write()
        unsafe { core::ptr::replace(self.element_ptr(), value) }
    }
}

impl<'a, T, A: Access> Cursor<'a, T, A> {
    fn from_non_null(base: NonNull<T>, len: usize) -> Self {
        Self {
            base,
            len,
            pos: 0,
            _marker: PhantomData,
        }
    }

    fn index(&self) -> Option<usize> {
        usize::try_from(self.pos).ok().filter(|&i| i < self.len)
    }

    fn element_ptr(&self) -> *mut T {
        match self.index() {
            // SAFETY: i < len, so the result stays inside the region
            Some(i) => unsafe { self.base.as_ptr().add(i) },
            None => panic!(
                "cursor position {} is outside the region of length {}",
                self.pos, self.len
            ),
        }
    }

    /// Offset of this cursor from the start of its region
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Number of elements in the region this cursor walks
    pub fn region_len(&self) -> usize {
        self.len
    }

    /// Whether the cursor denotes an element (not one-past-end or beyond)
    pub fn is_dereferenceable(&self) -> bool {
        self.index().is_some()
    }

    /// Address the cursor denotes
    pub fn as_ptr(&self) -> *const T {
        self.base.as_ptr().wrapping_offset(self.pos)
    }

    /// Read the current element
    ///
    /// Panics if the position is outside the region.
    pub fn read(self) -> T
    where
        T: Copy,
    {
        // SAFETY: element_ptr() is in bounds and T is Copy
        unsafe { self.element_ptr().read() }
    }

    /// Read the element `n` positions away
    pub fn read_at(self, n: isize) -> T
    where
        T: Copy,
    {
        (self + n).read()
    }

    /// Move forward one element (pre-increment)
    pub fn inc(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Move back one element (pre-decrement)
    pub fn dec(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Move forward one element, returning the previous position
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.pos += 1;
        previous
    }

    /// Move back one element, returning the previous position
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.pos -= 1;
        previous
    }

    // Zero-sized elements share one address, so their position breaks ties
    fn key(&self) -> (usize, isize) {
        let tie = if core::mem::size_of::<T>() == 0 { self.pos } else { 0 };
        (self.as_ptr() as usize, tie)
    }
}

impl<T, A: Access> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Copy for Cursor<'_, T, A> {}

impl<T, A: Access> core::fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.base)
            .field("len", &self.len)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T, A: Access> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T, A: Access> Eq for Cursor<'_, T, A> {}

impl<T, A: Access> PartialOrd for Cursor<'_, T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, A: Access> Ord for Cursor<'_, T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T, A: Access> Hash for Cursor<'_, T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<T, A: Access> AddAssign<isize> for Cursor<'_, T, A> {
    fn add_assign(&mut self, steps: isize) {
        self.pos += steps;
    }
}

impl<T, A: Access> SubAssign<isize> for Cursor<'_, T, A> {
    fn sub_assign(&mut self, steps: isize) {
        self.pos -= steps;
    }
}

impl<T, A: Access> Add<isize> for Cursor<'_, T, A> {
    type Output = Self;

    fn add(mut self, steps: isize) -> Self {
        self += steps;
        self
    }
}

impl<'a, T, A: Access> Add<Cursor<'a, T, A>> for isize {
    type Output = Cursor<'a, T, A>;

    fn add(self, cursor: Cursor<'a, T, A>) -> Cursor<'a, T, A> {
        cursor + self
    }
}

impl<T, A: Access> Sub<isize> for Cursor<'_, T, A> {
    type Output = Self;

    fn sub(mut self, steps: isize) -> Self {
        self -= steps;
        self
    }
}

impl<T, A: Access> Sub for Cursor<'_, T, A> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        let size = core::mem::size_of::<T>();
        if size == 0 {
            return self.pos - other.pos;
        }
        (self.as_ptr() as usize).wrapping_sub(other.as_ptr() as usize) as isize / size as isize
    }
}

impl<T: Copy, A: Access> RandomAccessCursor for Cursor<'_, T, A> {
    type Item = T;

    fn offset(self, n: isize) -> Self {
        self + n
    }

    fn distance_from(self, origin: Self) -> isize {
        self - origin
    }

    fn read(self) -> T {
        Cursor::read(self)
    }
}

impl<T: Copy> WritableCursor for Cursor<'_, T, ReadWrite> {
    fn write(self, value: T) {
        Cursor::write(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_is_rejected() {
        let cursor = unsafe { ConstCursor::<u32>::from_raw_parts(core::ptr::null(), 0) };
        assert_eq!(cursor.unwrap_err(), CoreError::NullCursor);

        let cursor = unsafe { MutCursor::<u32>::from_raw_parts_mut(core::ptr::null_mut(), 4) };
        assert_eq!(cursor.unwrap_err(), CoreError::NullCursor);
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let data = [10, 20, 30, 40, 50];
        let begin = ConstCursor::from_slice(&data);
        let end = begin + 5;

        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        assert_eq!((begin + 2).read(), 30);
        assert_eq!((2 + begin).read(), 30);
        assert_eq!((end - 1).read(), 50);
        assert_eq!(begin.read_at(3), 40);

        assert!(begin < end);
        assert!(begin <= begin);
        assert!(end > begin);
        assert!(end >= end);
        assert_ne!(begin, end);
        assert_eq!(begin + 5, end);

        let mut c = begin;
        c += 4;
        assert_eq!(c.read(), 50);
        c -= 3;
        assert_eq!(c.read(), 20);
    }

    #[test]
    fn test_increment_and_decrement() {
        let data = [1u8, 2, 3];
        let mut c = ConstCursor::from_slice(&data);

        assert_eq!(c.inc().read(), 2);
        let previous = c.post_inc();
        assert_eq!(previous.read(), 2);
        assert_eq!(c.read(), 3);

        assert_eq!(c.dec().read(), 2);
        let previous = c.post_dec();
        assert_eq!(previous.read(), 2);
        assert_eq!(c.read(), 1);
    }

    #[test]
    fn test_get_outside_region() {
        let data = [7u16; 2];
        let begin = ConstCursor::from_slice(&data);

        assert_eq!(begin.get(), Some(&7));
        assert_eq!((begin + 2).get(), None);
        assert_eq!((begin - 1).get(), None);
        assert!(!(begin + 2).is_dereferenceable());
    }

    #[test]
    #[should_panic(expected = "outside the region")]
    fn test_read_past_end_panics() {
        let data = [1i32, 2];
        let end = ConstCursor::from_slice(&data) + 2;
        end.read();
    }

    #[test]
    fn test_mutable_cursor_writes() {
        let mut data = [0i64; 4];
        {
            let begin = MutCursor::from_mut_slice(&mut data);
            let alias = begin;
            for i in 0..4 {
                (begin + i).write(i as i64 * 10);
            }
            assert_eq!(alias.replace(-1), 0);
            (begin + 1).swap(begin + 3);
        }
        assert_eq!(data, [-1, 30, 20, 10]);
    }

    #[test]
    fn test_cursors_from_overlapping_slices_compare_by_address() {
        let data = [0u32, 1, 2, 3, 4];
        let whole = ConstCursor::from_slice(&data);
        let tail = ConstCursor::from_slice(&data[1..]);

        assert_eq!(whole + 1, tail);
        assert!(whole + 3 > tail);
        assert!(whole < tail);
        assert_eq!((whole + 3) - tail, 2);
        assert_eq!(tail - (whole + 3), -2);
        assert_eq!((whole + 4).read(), (tail + 3).read());
    }

    #[test]
    fn test_zero_sized_cursors_order_by_position() {
        let data = [(); 3];
        let begin = ConstCursor::from_slice(&data);

        assert!(begin < begin + 1);
        assert_eq!((begin + 3) - begin, 3);
        assert_eq!(begin + 2, 2 + begin);
    }

    #[test]
    fn test_empty_region_has_equal_bounds() {
        let data: [u32; 0] = [];
        let begin = ConstCursor::from_slice(&data);
        let end = begin + data.len() as isize;

        assert_eq!(begin, end);
        assert_eq!(end - begin, 0);
        assert!(!begin.as_ptr().is_null());
    }
}
