//! Reverse adapter over a forward cursor

use crate::cursor::ConstCursor;
use crate::traits::{RandomAccessCursor, WritableCursor};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Walks the range of a forward cursor back-to-front
///
/// `Rev(c)` denotes the element just before `c`, so `Rev(end)` is the
/// reverse begin and `Rev(begin)` the reverse end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rev<C>(C);

impl<C> Rev<C> {
    /// Reverse cursor over the elements preceding `base`
    pub fn new(base: C) -> Self {
        Self(base)
    }

    /// The underlying forward cursor
    pub fn base(self) -> C {
        self.0
    }
}

impl<C: RandomAccessCursor> Rev<C> {
    /// Read the current element
    pub fn read(self) -> C::Item {
        self.0.offset(-1).read()
    }

    /// Read the element `n` positions further along the reverse walk
    pub fn read_at(self, n: isize) -> C::Item {
        (self + n).read()
    }

    pub fn inc(&mut self) -> &mut Self {
        self.0 = self.0.offset(-1);
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.0 = self.0.offset(1);
        self
    }

    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }
}

impl<C: WritableCursor> Rev<C> {
    /// Overwrite the current element
    pub fn write(self, value: C::Item) {
        self.0.offset(-1).write(value)
    }
}

impl<'a, T> Rev<ConstCursor<'a, T>> {
    /// Reference to the current element, `None` outside the region
    pub fn get(self) -> Option<&'a T> {
        (self.0 - 1).get()
    }
}

impl<C: Ord> PartialOrd for Rev<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for Rev<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<C: RandomAccessCursor> AddAssign<isize> for Rev<C> {
    fn add_assign(&mut self, steps: isize) {
        self.0 = self.0.offset(-steps);
    }
}

impl<C: RandomAccessCursor> SubAssign<isize> for Rev<C> {
    fn sub_assign(&mut self, steps: isize) {
        self.0 = self.0.offset(steps);
    }
}

impl<C: RandomAccessCursor> Add<isize> for Rev<C> {
    type Output = Self;

    fn add(self, steps: isize) -> Self {
        Self(self.0.offset(-steps))
    }
}

impl<C: RandomAccessCursor> Add<Rev<C>> for isize {
    type Output = Rev<C>;

    fn add(self, cursor: Rev<C>) -> Rev<C> {
        cursor + self
    }
}

impl<C: RandomAccessCursor> Sub<isize> for Rev<C> {
    type Output = Self;

    fn sub(self, steps: isize) -> Self {
        Self(self.0.offset(steps))
    }
}

impl<C: RandomAccessCursor> Sub for Rev<C> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        other.0.distance_from(self.0)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Rev<C> {
    type Item = C::Item;

    fn offset(self, n: isize) -> Self {
        self + n
    }

    fn distance_from(self, origin: Self) -> isize {
        self - origin
    }

    fn read(self) -> C::Item {
        Rev::read(self)
    }
}

impl<C: WritableCursor> WritableCursor for Rev<C> {
    fn write(self, value: C::Item) {
        Rev::write(self, value)
    }
}
