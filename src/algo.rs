//! Sort-maintaining insertion and binary search.
//!
//! Both families share one search routine over a half-open window `[lo, hi)`, so the
//! position an element is inserted at always agrees with what [`binary_search`] reports
//! for it afterwards.
//!
//! Sorted sequences are ascending under the supplied [`Comparator`]. Equal elements are
//! kept in arrival order: a new element goes after every existing element it compares
//! equal to, unless a merge callback absorbs it into the last of them.
//!
//! The main entry points are [`insert_sorted`], [`insert_all_sorted`] and
//! [`binary_search`].

use crate::core::{Comparator, Placement, RandomAccess, SearchResult, Sequence};
use crate::error::{Result, check_window};
use std::cmp::Ordering;

/// Inserts `item` into a sorted sequence, keeping it sorted.
///
/// If elements comparing equal to `item` already exist, `item` is placed right after
/// the last of them, so repeated insertions of equal keys keep their arrival order.
///
/// # Arguments
///
/// * `seq` - A sequence sorted in ascending order under `cmp`.
/// * `item` - The element to insert.
/// * `cmp` - The ordering: [`Natural`](crate::Natural), an ordering object or a closure.
///
/// # Returns
///
/// [`Placement::Inserted`] with the index `item` now occupies.
///
/// # Examples
///
/// ```
/// use seqsort::prelude::*;
///
/// let mut data = Vec::new();
/// for value in [5, 3, 8, 3] {
///     insert_sorted(&mut data, value, &Natural);
/// }
///
/// assert_eq!(data, vec![3, 3, 5, 8]);
/// ```
pub fn insert_sorted<S, C>(seq: &mut S, item: S::Item, cmp: &C) -> Placement
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    place(seq, item, cmp, None::<fn(&mut S::Item, S::Item)>)
}

/// Inserts `item` into a sorted sequence, or merges it into an equal element.
///
/// When an element comparing equal to `item` exists, `merge` is called exactly once with
/// the last such element and `item`, and nothing is inserted. Otherwise `item` is
/// inserted at its sorted position and `merge` is never called.
///
/// # Examples
///
/// ```
/// use seqsort::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Line {
///     sku: u32,
///     qty: u32,
/// }
///
/// // Lines ordered by SKU; a repeated SKU adds to the existing quantity.
/// let by_sku = comparator(|a: &Line, b| a.sku.cmp(&b.sku));
/// let mut order = vec![Line { sku: 10, qty: 2 }, Line { sku: 40, qty: 1 }];
///
/// let placement = insert_sorted_with(&mut order, Line { sku: 10, qty: 3 }, &by_sku, |existing, incoming| {
///     existing.qty += incoming.qty;
/// });
///
/// assert_eq!(placement, Placement::Merged(0));
/// assert_eq!(order, vec![Line { sku: 10, qty: 5 }, Line { sku: 40, qty: 1 }]);
/// ```
pub fn insert_sorted_with<S, C, M>(seq: &mut S, item: S::Item, cmp: &C, merge: M) -> Placement
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    M: FnOnce(&mut S::Item, S::Item),
{
    place(seq, item, cmp, Some(merge))
}

/// Inserts every element of `items` into a sorted sequence, in iteration order.
///
/// Later elements that compare equal to earlier ones from the same batch end up after
/// them. The operation is not atomic: if `cmp` panics midway, the elements already
/// processed stay in the sequence.
///
/// Returns the number of inserted elements.
///
/// # Examples
///
/// ```
/// use seqsort::prelude::*;
///
/// let mut data = vec![10, 20];
/// let inserted = insert_all_sorted(&mut data, [15, 5, 25], &Natural);
///
/// assert_eq!(inserted, 3);
/// assert_eq!(data, vec![5, 10, 15, 20, 25]);
/// ```
pub fn insert_all_sorted<S, C, I>(seq: &mut S, items: I, cmp: &C) -> usize
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    I: IntoIterator<Item = S::Item>,
{
    items
        .into_iter()
        .map(|item| insert_sorted(&mut *seq, item, cmp))
        .filter(|placement| placement.is_inserted())
        .count()
}

/// Like [`insert_all_sorted`], merging elements that compare equal to an existing one.
///
/// `merge` sees elements inserted earlier in the same batch as existing elements, so a
/// batch containing duplicates collapses onto a single entry.
///
/// Returns the number of inserted (not merged) elements.
pub fn insert_all_sorted_with<S, C, I, M>(seq: &mut S, items: I, cmp: &C, mut merge: M) -> usize
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    I: IntoIterator<Item = S::Item>,
    M: FnMut(&mut S::Item, S::Item),
{
    items
        .into_iter()
        .map(|item| place(&mut *seq, item, cmp, Some(&mut merge)))
        .filter(|placement| placement.is_inserted())
        .count()
}

/// Binary searches a sorted sequence for `key`.
///
/// # Returns
///
/// * [`SearchResult::Found`] with the index of an element comparing equal to `key`. With
///   several equal elements, any one of them may be reported.
/// * [`SearchResult::NotFound`] with the index of the first element greater than `key`
///   (or `len()`), i.e. where `key` would have to be inserted.
///
/// # Examples
///
/// ```
/// use seqsort::prelude::*;
///
/// let data = vec![3, 3, 5, 8];
///
/// assert!(matches!(binary_search(&data, &3, &Natural), SearchResult::Found(0 | 1)));
/// assert_eq!(binary_search(&data, &6, &Natural), SearchResult::NotFound(3));
/// assert_eq!(binary_search(&data, &6, &Natural).encode(), !3);
/// ```
pub fn binary_search<S, C>(seq: &S, key: &S::Item, cmp: &C) -> SearchResult
where
    S: RandomAccess + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    search_window(seq, 0, seq.len(), key, cmp)
}

/// Binary searches the sorted window `[index, index + count)` of a sequence for `key`.
///
/// Only the window has to be sorted. Reported indices (found or insertion point) are
/// absolute positions in `seq`, and always fall inside `index..=index + count`.
///
/// # Errors
///
/// [`SequenceError::RangeOutOfBounds`](crate::SequenceError::RangeOutOfBounds) if the
/// window extends past the end of the sequence.
///
/// # Examples
///
/// ```
/// use seqsort::prelude::*;
///
/// // Only the middle section is sorted.
/// let data = vec![99, 1, 4, 9, 0];
///
/// assert_eq!(binary_search_range(&data, 1, 3, &4, &Natural)?, SearchResult::Found(2));
/// assert_eq!(binary_search_range(&data, 1, 3, &5, &Natural)?, SearchResult::NotFound(3));
/// assert!(binary_search_range(&data, 3, 3, &5, &Natural).is_err());
/// # Ok::<(), seqsort::SequenceError>(())
/// ```
pub fn binary_search_range<S, C>(
    seq: &S,
    index: usize,
    count: usize,
    key: &S::Item,
    cmp: &C,
) -> Result<SearchResult>
where
    S: RandomAccess + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    check_window(index, count, seq.len())?;
    Ok(search_window(seq, index, index + count, key, cmp))
}

/// Halving search over `[lo, hi)`.
///
/// Invariant: every element before `lo` is less than `key`, every element from `hi` on is
/// greater. The loop ends on an equal element or when the window is empty, in which case
/// `lo` is the insertion point.
#[inline]
fn search_window<S, C>(seq: &S, mut lo: usize, mut hi: usize, key: &S::Item, cmp: &C) -> SearchResult
where
    S: RandomAccess + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(seq.item_at(mid), key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return SearchResult::Found(mid),
        }
    }
    SearchResult::NotFound(lo)
}

/// Walks forward from `hit` while elements still compare equal to `item`.
fn last_equal<S, C>(seq: &S, hit: usize, item: &S::Item, cmp: &C) -> usize
where
    S: RandomAccess + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    let len = seq.len();
    let mut last = hit;
    while last + 1 < len && cmp.compare(seq.item_at(last + 1), item) == Ordering::Equal {
        last += 1;
    }
    last
}

fn place<S, C, M>(seq: &mut S, item: S::Item, cmp: &C, merge: Option<M>) -> Placement
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    M: FnOnce(&mut S::Item, S::Item),
{
    let len = seq.len();
    let index = match search_window(&*seq, 0, len, &item, cmp) {
        SearchResult::Found(hit) => {
            let last = last_equal(&*seq, hit, &item, cmp);
            if let Some(merge) = merge {
                merge(seq.item_at_mut(last), item);
                return Placement::Merged(last);
            }
            last + 1
        }
        SearchResult::NotFound(index) => index,
    };

    seq.insert_at(index, item);
    Placement::Inserted(index)
}
