//! In-place algorithms over cursor ranges
//!
//! The sort is a heapsort: it needs nothing but random reads, writes and
//! swaps, so it runs unchanged over forward and reverse ranges.

use crate::adapters::distance;
use crate::traits::{RandomAccessCursor, WritableCursor};
use core::cmp::Ordering;

/// Sort `[first, last)` in ascending order of the cursor's walk
///
/// Sorting a reverse range therefore leaves the underlying array in
/// descending order.
pub fn sort<C>(first: C, last: C)
where
    C: WritableCursor,
    C::Item: Ord,
{
    sort_by(first, last, |a, b| a.cmp(b));
}

/// Sort `[first, last)` with a comparator
pub fn sort_by<C, F>(first: C, last: C, mut compare: F)
where
    C: WritableCursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let len = distance(first, last);
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(first, root, len, &mut compare);
    }
    for end in (1..len).rev() {
        first.swap(first.offset(end));
        sift_down(first, 0, end, &mut compare);
    }
}

fn sift_down<C, F>(first: C, mut root: isize, end: isize, compare: &mut F)
where
    C: WritableCursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end
            && compare(&first.offset(child).read(), &first.offset(child + 1).read())
                == Ordering::Less
        {
            child += 1;
        }
        if compare(&first.offset(root).read(), &first.offset(child).read()) != Ordering::Less {
            break;
        }
        first.offset(root).swap(first.offset(child));
        root = child;
    }
}

/// Whether `[first, last)` is ordered under `compare`
pub fn is_sorted_by<C, F>(first: C, last: C, mut compare: F) -> bool
where
    C: RandomAccessCursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let len = distance(first, last);
    (1..len).all(|i| {
        compare(&first.offset(i - 1).read(), &first.offset(i).read()) != Ordering::Greater
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{MutCursor, Rev};

    #[test]
    fn test_sort_forward() {
        let mut data = [5, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        {
            let begin = MutCursor::from_mut_slice(&mut data);
            sort(begin, begin + 10);
            assert!(is_sorted_by(begin, begin + 10, |a, b| a.cmp(b)));
        }
        assert_eq!(data, [1, 1, 2, 3, 4, 5, 5, 5, 6, 9]);
    }

    #[test]
    fn test_sort_reverse_range_is_descending() {
        let mut data: Vec<i32> = (0..30).collect();
        {
            let begin = MutCursor::from_mut_slice(&mut data);
            sort(Rev::new(begin + 30), Rev::new(begin));
        }
        let expected: Vec<i32> = (0..30).rev().collect();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_by_comparator_and_subrange() {
        let mut data = [3u8, 9, 8, 7, 0];
        {
            let begin = MutCursor::from_mut_slice(&mut data);
            sort_by(begin + 1, begin + 4, |a, b| b.cmp(a));
        }
        assert_eq!(data, [3, 9, 8, 7, 0]);

        {
            let begin = MutCursor::from_mut_slice(&mut data);
            sort_by(begin + 1, begin + 4, |a, b| a.cmp(b));
        }
        assert_eq!(data, [3, 7, 8, 9, 0]);
    }

    #[test]
    fn test_sort_short_ranges() {
        let mut data = [2u16, 1];
        {
            let begin = MutCursor::from_mut_slice(&mut data);
            sort(begin, begin);
            sort(begin, begin + 1);
        }
        assert_eq!(data, [2, 1]);
    }
}
