//! Free-function cursor adapters
//!
//! These mirror the member operations so generic range code can be
//! written once for forward and reverse cursors alike.

use crate::traits::RandomAccessCursor;
use core::iter::FusedIterator;

/// Move `cursor` by `n` elements in place
pub fn advance<C: RandomAccessCursor>(cursor: &mut C, n: isize) {
    *cursor = cursor.offset(n);
}

/// Signed number of elements from `first` to `last`
pub fn distance<C: RandomAccessCursor>(first: C, last: C) -> isize {
    last.distance_from(first)
}

/// `cursor` moved forward by `n` elements
pub fn next<C: RandomAccessCursor>(cursor: C, n: isize) -> C {
    cursor.offset(n)
}

/// `cursor` moved backward by `n` elements
pub fn prev<C: RandomAccessCursor>(cursor: C, n: isize) -> C {
    cursor.offset(-n)
}

/// Iterator over the half-open range `[first, last)`
pub fn span<C: RandomAccessCursor>(first: C, last: C) -> Span<C> {
    Span::new(first, last)
}

/// Iterator yielding the elements between two cursors
#[derive(Debug, Clone)]
pub struct Span<C> {
    front: C,
    back: C,
}

impl<C: RandomAccessCursor> Span<C> {
    pub fn new(first: C, last: C) -> Self {
        debug_assert!(first <= last, "span start lies after its end");
        Self {
            front: first,
            back: last,
        }
    }

    /// Cursors bounding the elements not yet yielded
    pub fn bounds(&self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: RandomAccessCursor> Iterator for Span<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.front.read();
        self.front = self.front.offset(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(distance(self.front, self.back)).unwrap_or(0);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<C::Item> {
        let remaining = self.len();
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front = self.front.offset(n as isize);
        self.next()
    }
}

impl<C: RandomAccessCursor> DoubleEndedIterator for Span<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back.offset(-1);
        Some(self.back.read())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Span<C> {}

impl<C: RandomAccessCursor> FusedIterator for Span<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ConstCursor, Rev};

    #[test]
    fn test_advance_next_prev_distance() {
        let data = [5u32, 6, 7, 8, 9];
        let begin = ConstCursor::from_slice(&data);
        let end = next(begin, data.len() as isize);

        assert_eq!(distance(begin, end), 5);
        assert_eq!(distance(end, begin), -5);
        assert_eq!(prev(end, 1).read(), 9);
        assert_eq!(prev(end, 5), begin);

        let mut c = begin;
        advance(&mut c, 3);
        assert_eq!(c.read(), 8);
        advance(&mut c, -2);
        assert_eq!(c.read(), 6);
    }

    #[test]
    fn test_adapters_on_reverse_cursors() {
        let data = [1i16, 2, 3];
        let begin = ConstCursor::from_slice(&data);
        let rbegin = Rev::new(begin + 3);
        let rend = Rev::new(begin);

        assert_eq!(distance(rbegin, rend), 3);
        assert_eq!(next(rbegin, 3), rend);
        assert_eq!(next(rbegin, 1).read(), 2);
        assert_eq!(prev(rend, 1).read(), 1);
    }

    #[test]
    fn test_span_iterates_both_ways() {
        let data = [1u8, 2, 3, 4];
        let begin = ConstCursor::from_slice(&data);
        let end = begin + 4;

        let forward: Vec<u8> = span(begin, end).collect();
        let backward: Vec<u8> = span(Rev::new(end), Rev::new(begin)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(backward, reversed);
        assert_eq!(span(begin, end).rev().collect::<Vec<_>>(), reversed);
        assert_eq!(span(begin, end).len(), 4);
        assert_eq!(span(begin, end).nth(2), Some(3));
        assert_eq!(span(begin, end).nth(4), None);
    }

    #[test]
    fn test_empty_span() {
        let data: [u64; 0] = [];
        let begin = ConstCursor::from_slice(&data);
        let mut it = span(begin, next(begin, 0));

        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
