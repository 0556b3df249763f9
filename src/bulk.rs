//! Index-based bulk mutations.
//!
//! None of these assume or preserve an ordering. They are built on the
//! [`Sequence`] primitives only, so they work for any container implementing it.

use crate::core::Sequence;
use crate::error::{Result, SequenceError};

/// Appends every element of `items` to the end of `seq`, in source order.
///
/// Returns the number of appended elements.
///
/// ```
/// use seqsort::append_all;
/// use std::collections::VecDeque;
///
/// let mut queue = VecDeque::from(vec![1, 2]);
/// assert_eq!(append_all(&mut queue, vec![3, 4]), 2);
/// assert_eq!(queue, [1, 2, 3, 4]);
/// ```
pub fn append_all<S, I>(seq: &mut S, items: I) -> usize
where
    S: Sequence + ?Sized,
    I: IntoIterator<Item = S::Item>,
{
    items.into_iter().fold(0, |appended, item| {
        seq.push_back(item);
        appended + 1
    })
}

/// Removes up to `count` consecutive elements starting at `index`.
///
/// A window running past the end is clipped, so exactly `min(count, len - index)`
/// elements go. Elements are removed from the highest index down; the survivors keep
/// their relative order. Removing from an empty sequence is a no-op.
///
/// Returns the number of removed elements.
///
/// # Errors
///
/// * [`SequenceError::IndexOutOfRange`] if `index >= len()` on a non-empty sequence.
/// * [`SequenceError::EmptyRange`] if `count == 0`.
///
/// ```
/// use seqsort::remove_range;
///
/// let mut data = vec![0, 1, 2, 3, 4, 5];
/// assert_eq!(remove_range(&mut data, 1, 2)?, 2);
/// assert_eq!(data, vec![0, 3, 4, 5]);
///
/// assert_eq!(remove_range(&mut data, 2, 10)?, 2);
/// assert_eq!(data, vec![0, 3]);
/// # Ok::<(), seqsort::SequenceError>(())
/// ```
pub fn remove_range<S>(seq: &mut S, index: usize, count: usize) -> Result<usize>
where
    S: Sequence + ?Sized,
{
    let len = seq.len();
    if len == 0 {
        return Ok(0);
    }
    if index >= len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }
    if count == 0 {
        return Err(SequenceError::EmptyRange { index });
    }

    let end = index.saturating_add(count).min(len);
    seq.remove_span(index..end);
    Ok(end - index)
}

/// Removes every element satisfying `pred`.
///
/// Indices are visited from the end towards the front, so `pred` sees the elements in
/// reverse order and a removal never shifts an element that is still to be visited.
///
/// Returns the number of removed elements.
///
/// ```
/// use seqsort::remove_where;
///
/// let mut data = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(remove_where(&mut data, |&v| v % 3 == 0), 2);
/// assert_eq!(data, vec![1, 2, 4, 5]);
/// ```
pub fn remove_where<S, P>(seq: &mut S, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut removed = 0;
    for index in (0..seq.len()).rev() {
        if pred(seq.item_at(index)) {
            seq.remove_at(index);
            removed += 1;
        }
    }
    removed
}

/// Inserts every element of `items` at `index`, keeping their source order.
///
/// The source is walked back to front and each element is inserted at the same `index`,
/// pushing the ones inserted before it towards the end.
///
/// Returns the number of inserted elements.
///
/// # Errors
///
/// [`SequenceError::IndexOutOfRange`] if `index > len()`. Nothing is inserted in that
/// case.
///
/// ```
/// use seqsort::insert_range_at;
///
/// let mut data = vec!['a', 'e'];
/// assert_eq!(insert_range_at(&mut data, 1, ['b', 'c', 'd'])?, 3);
/// assert_eq!(data, vec!['a', 'b', 'c', 'd', 'e']);
/// # Ok::<(), seqsort::SequenceError>(())
/// ```
pub fn insert_range_at<S, I>(seq: &mut S, index: usize, items: I) -> Result<usize>
where
    S: Sequence + ?Sized,
    I: IntoIterator<Item = S::Item>,
    I::IntoIter: DoubleEndedIterator,
{
    let len = seq.len();
    if index > len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }

    Ok(items.into_iter().rev().fold(0, |inserted, item| {
        seq.insert_at(index, item);
        inserted + 1
    }))
}
