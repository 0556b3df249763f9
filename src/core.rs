//! Core traits and types for seqsort.
//!
//! This module defines:
//! - [`RandomAccess`] and [`Sequence`]: the indexed container handles every operation borrows.
//! - [`Comparator`]: the single three-way ordering capability, with the [`Natural`],
//!   [`Reversed`] and [`ByKey`] strategies.
//! - [`SearchResult`] and [`Placement`]: what binary search and sorted insertion report.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Range;

/// Read-only, randomly indexable view of a sequence.
///
/// Every search in this crate only needs this trait, so plain slices work as well as
/// owned containers. Implement it for your own storage (an arena, a columnar buffer)
/// to reuse the algorithms without copying into a `Vec`.
///
/// # Examples
///
/// ```
/// use seqsort::core::RandomAccess;
///
/// // Every other element of a borrowed buffer.
/// struct Strided<'a>(&'a [u32]);
///
/// impl RandomAccess for Strided<'_> {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.0.len().div_ceil(2)
///     }
///
///     fn item_at(&self, index: usize) -> &u32 {
///         &self.0[index * 2]
///     }
/// }
///
/// let buffer = [1, 100, 3, 100, 5, 100, 7];
/// let view = Strided(&buffer);
/// assert_eq!(seqsort::find_index(&view, |&v| v > 4), Some(2));
/// ```
pub trait RandomAccess {
    /// Element type stored in the sequence.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Callers in this crate never pass an index `>= len()`.
    fn item_at(&self, index: usize) -> &Self::Item;
}

/// Mutable handle over a randomly indexable sequence.
///
/// The required methods mirror `Vec::insert` / `Vec::remove`: inserting shifts later
/// elements towards the end, removing shifts them back.
pub trait Sequence: RandomAccess {
    /// Returns a mutable reference to the element at `index`.
    fn item_at_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Inserts `item` at `index` (`index <= len()`), shifting later elements up by one.
    fn insert_at(&mut self, index: usize, item: Self::Item);

    /// Removes and returns the element at `index` (`index < len()`).
    fn remove_at(&mut self, index: usize) -> Self::Item;

    /// Appends `item` after the last element.
    fn push_back(&mut self, item: Self::Item) {
        let len = self.len();
        self.insert_at(len, item);
    }

    /// Removes every element in `span`.
    ///
    /// The default removes one element at a time, highest index first, so that no
    /// not-yet-removed index moves during the loop.
    fn remove_span(&mut self, span: Range<usize>) {
        for index in span.rev() {
            self.remove_at(index);
        }
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    fn item_at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }

    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn remove_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

// Ring buffer with O(1) indexing; inserts and removals near either end stay cheap.
impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for VecDeque<T> {
    fn item_at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> T {
        let len = self.len();
        match self.remove(index) {
            Some(item) => item,
            None => panic!("removal index (is {index}) should be < len (is {len})"),
        }
    }

    fn remove_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

/// A three-way ordering between two elements.
///
/// This is the one ordering capability every sorted operation accepts. It comes in three
/// interchangeable forms:
///
/// - the element type's own order, through [`Natural`];
/// - any type implementing this trait (including `dyn Comparator<T>`);
/// - any function or closure `Fn(&T, &T) -> Ordering`.
///
/// Implementations must be a total order for the algorithms to keep their guarantees.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped ordering.
///
/// ```
/// use seqsort::prelude::*;
///
/// let mut data = vec![9, 5, 1];
/// insert_sorted(&mut data, 7, &Reversed(Natural));
/// assert_eq!(data, vec![9, 7, 5, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a key extracted from each of them.
///
/// ```
/// use seqsort::prelude::*;
///
/// // Ordered by the letter, not the number.
/// let mut pairs = vec![(7, 'a'), (1, 'c')];
/// insert_sorted(&mut pairs, (4, 'b'), &ByKey(|p: &(u32, char)| p.1));
/// assert_eq!(pairs, vec![(7, 'a'), (4, 'b'), (1, 'c')]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Pins the argument types of a comparison closure.
///
/// Closures written inline at a generic `&C where C: Comparator<T>` parameter need their
/// argument types spelled out; passing them through this function lets inference fill
/// them in.
///
/// ```
/// use seqsort::prelude::*;
///
/// let data = vec![(1, 'a'), (3, 'b'), (5, 'c')];
/// let by_first = comparator(|a: &(i32, char), b| a.0.cmp(&b.0));
/// assert!(binary_search(&data, &(3, 'z'), &by_first).is_found());
/// ```
pub fn comparator<T: ?Sized, F>(f: F) -> F
where
    F: Fn(&T, &T) -> Ordering,
{
    f
}

/// Outcome of a binary search.
///
/// `NotFound` carries the insertion point: the index of the first element greater than
/// the key, or the end of the searched range if there is none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// An element comparing equal to the key sits at this index.
    Found(usize),
    /// No element compares equal; inserting the key here keeps the sequence sorted.
    NotFound(usize),
}

impl SearchResult {
    /// Returns the carried index, whichever variant this is.
    pub fn index(self) -> usize {
        match self {
            SearchResult::Found(index) | SearchResult::NotFound(index) => index,
        }
    }

    /// Returns `true` for [`SearchResult::Found`].
    pub fn is_found(self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// Returns the matching index, if any.
    pub fn found(self) -> Option<usize> {
        match self {
            SearchResult::Found(index) => Some(index),
            SearchResult::NotFound(_) => None,
        }
    }

    /// Packs the result into a single signed integer.
    ///
    /// A found index is returned as is; a missing key is returned as the bitwise
    /// complement of its insertion point, which is always negative. This is the
    /// encoding used by `BinarySearch` APIs that have no sum types.
    ///
    /// ```
    /// use seqsort::SearchResult;
    ///
    /// assert_eq!(SearchResult::Found(4).encode(), 4);
    /// assert_eq!(SearchResult::NotFound(3).encode(), !3);
    /// assert_eq!(SearchResult::decode(-4), SearchResult::NotFound(3));
    /// ```
    pub fn encode(self) -> isize {
        match self {
            SearchResult::Found(index) => index as isize,
            SearchResult::NotFound(index) => !(index as isize),
        }
    }

    /// Inverse of [`SearchResult::encode`].
    pub fn decode(encoded: isize) -> Self {
        if encoded >= 0 {
            SearchResult::Found(encoded as usize)
        } else {
            SearchResult::NotFound(!encoded as usize)
        }
    }
}

// Same shape as `slice::binary_search`.
impl From<SearchResult> for Result<usize, usize> {
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::Found(index) => Ok(index),
            SearchResult::NotFound(index) => Err(index),
        }
    }
}

/// Outcome of a sort-maintaining insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The new element now sits at this index.
    Inserted(usize),
    /// The new element was handed to the merge callback together with the existing
    /// element at this index; the sequence length did not change.
    Merged(usize),
}

impl Placement {
    /// Returns the index the new element was inserted at or merged into.
    pub fn index(self) -> usize {
        match self {
            Placement::Inserted(index) | Placement::Merged(index) => index,
        }
    }

    /// Returns `true` if the sequence grew by one element.
    pub fn is_inserted(self) -> bool {
        matches!(self, Placement::Inserted(_))
    }
}
