//! Predicate and equality searches.
//!
//! These scans make no ordering assumption and never mutate the sequence. "Not found" is
//! `None`; an `Err` only ever means the requested start index or window does not fit the
//! sequence.

use crate::core::RandomAccess;
use crate::error::{Result, SequenceError, check_window};

/// Returns the index of the first element satisfying `pred`.
///
/// ```
/// use seqsort::find_index;
///
/// let data = vec![4, 7, 10, 13];
/// assert_eq!(find_index(&data, |&v| v % 2 == 1), Some(1));
/// assert_eq!(find_index(&data, |&v| v > 100), None);
/// ```
pub fn find_index<S, P>(seq: &S, pred: P) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    scan_forward(seq, 0, seq.len(), pred)
}

/// Returns the index of the first element at or after `start` satisfying `pred`.
///
/// `start == len()` is allowed and finds nothing.
///
/// # Errors
///
/// [`SequenceError::IndexOutOfRange`] if `start > len()`.
pub fn find_index_from<S, P>(seq: &S, start: usize, pred: P) -> Result<Option<usize>>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let len = seq.len();
    if start > len {
        return Err(SequenceError::IndexOutOfRange { index: start, len });
    }
    Ok(scan_forward(seq, start, len, pred))
}

/// Returns the index of the first element satisfying `pred` among the `count` elements
/// starting at `start`.
///
/// # Errors
///
/// [`SequenceError::RangeOutOfBounds`] if `start + count > len()`.
///
/// ```
/// use seqsort::find_index_in;
///
/// let data = vec![1, 8, 2, 9, 3];
/// assert_eq!(find_index_in(&data, 2, 2, |&v| v > 5)?, Some(3));
/// assert_eq!(find_index_in(&data, 2, 1, |&v| v > 5)?, None);
/// # Ok::<(), seqsort::SequenceError>(())
/// ```
pub fn find_index_in<S, P>(seq: &S, start: usize, count: usize, pred: P) -> Result<Option<usize>>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    check_window(start, count, seq.len())?;
    Ok(scan_forward(seq, start, start + count, pred))
}

/// Returns the index of the last element satisfying `pred`.
///
/// ```
/// use seqsort::find_last_index;
///
/// let data = vec![4, 7, 10, 13];
/// assert_eq!(find_last_index(&data, |&v| v % 2 == 1), Some(3));
/// ```
pub fn find_last_index<S, P>(seq: &S, pred: P) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    scan_backward(seq, 0, seq.len(), pred)
}

/// Searches backward from `start` (inclusive) to the front for an element satisfying
/// `pred`.
///
/// # Errors
///
/// [`SequenceError::IndexOutOfRange`] if `start >= len()` on a non-empty sequence. An
/// empty sequence always yields `Ok(None)`.
pub fn find_last_index_from<S, P>(seq: &S, start: usize, pred: P) -> Result<Option<usize>>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let len = seq.len();
    if len == 0 {
        return Ok(None);
    }
    if start >= len {
        return Err(SequenceError::IndexOutOfRange { index: start, len });
    }
    Ok(scan_backward(seq, 0, start + 1, pred))
}

/// Searches the `count` elements ending at `start` (inclusive), back to front, for an
/// element satisfying `pred`.
///
/// # Errors
///
/// * [`SequenceError::IndexOutOfRange`] if `start >= len()` on a non-empty sequence.
/// * [`SequenceError::RangeOutOfBounds`] if the window would reach before index 0
///   (`count > start + 1`), or if `count > 0` on an empty sequence.
///
/// ```
/// use seqsort::find_last_index_in;
///
/// let data = vec![9, 1, 9, 1, 1];
/// assert_eq!(find_last_index_in(&data, 3, 2, |&v| v == 9)?, Some(2));
/// assert_eq!(find_last_index_in(&data, 4, 2, |&v| v == 9)?, None);
/// # Ok::<(), seqsort::SequenceError>(())
/// ```
pub fn find_last_index_in<S, P>(
    seq: &S,
    start: usize,
    count: usize,
    pred: P,
) -> Result<Option<usize>>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let len = seq.len();
    if len == 0 {
        return match count {
            0 => Ok(None),
            _ => Err(SequenceError::RangeOutOfBounds { index: start, count, len }),
        };
    }
    if start >= len {
        return Err(SequenceError::IndexOutOfRange { index: start, len });
    }
    let end = start + 1;
    if count > end {
        return Err(SequenceError::RangeOutOfBounds { index: start, count, len });
    }
    Ok(scan_backward(seq, end - count, end, pred))
}

/// Returns the index of the last element equal to `target`.
///
/// Equality is `PartialEq`, independent of any ordering.
///
/// ```
/// use seqsort::last_index_of;
///
/// let data = vec!["a", "b", "a", "c"];
/// assert_eq!(last_index_of(&data, &"a"), Some(2));
/// assert_eq!(last_index_of(&data, &"z"), None);
/// ```
pub fn last_index_of<S>(seq: &S, target: &S::Item) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: PartialEq,
{
    scan_backward(seq, 0, seq.len(), |item| item == target)
}

#[inline]
fn scan_forward<S, P>(seq: &S, start: usize, end: usize, mut pred: P) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    (start..end).find(|&index| pred(seq.item_at(index)))
}

#[inline]
fn scan_backward<S, P>(seq: &S, start: usize, end: usize, mut pred: P) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    (start..end).rev().find(|&index| pred(seq.item_at(index)))
}
