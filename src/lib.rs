//! # Seqsort
//!
//! `seqsort` keeps random-access sequences sorted incrementally and searches them, without
//! ever re-sorting. It also carries the index-based bulk operations (range removal,
//! predicate removal, bulk insertion at an index) and predicate lookups that sorted
//! containers usually need next to it.
//!
//! ## Key Features
//!
//! - **Stable sorted insertion**: [`insert_sorted`] binary-searches the insertion point and
//!   places a new element after every existing element it compares equal to, so equal keys
//!   keep their arrival order. [`insert_sorted_with`] instead hands the new element to a
//!   merge callback together with the equal element already present.
//! - **One ordering capability**: every sorted operation takes a [`Comparator`]. The
//!   element type's own order ([`Natural`]), an ordering object and a plain closure are all
//!   comparators, and all go through the same code path.
//! - **Explicit search results**: [`binary_search`] returns a [`SearchResult`] that is either
//!   `Found(index)` or `NotFound(insertion_point)`, with [`SearchResult::encode`] available
//!   for callers that need the classic bitwise-complement integer.
//! - **Container agnostic**: the algorithms work over the [`RandomAccess`] and [`Sequence`]
//!   traits, implemented for slices, `Vec` and `VecDeque`, and implementable for any
//!   indexed storage.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use seqsort::prelude::*;
//!
//! let mut data = Vec::new();
//! for value in [5, 3, 8, 3] {
//!     insert_sorted(&mut data, value, &Natural);
//! }
//! assert_eq!(data, vec![3, 3, 5, 8]);
//!
//! let hit = binary_search(&data, &5, &Natural);
//! assert_eq!(hit, SearchResult::Found(2));
//!
//! let miss = binary_search(&data, &6, &Natural);
//! assert_eq!(miss, SearchResult::NotFound(3));
//! assert_eq!(SearchResult::decode(miss.encode()), miss);
//! ```
//!
//! ### Custom Orderings
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a comparator. Ordering objects implement
//! [`Comparator`] directly.
//!
//! ```rust
//! use seqsort::prelude::*;
//! use std::cmp::Ordering;
//!
//! struct CaseInsensitive;
//!
//! impl Comparator<String> for CaseInsensitive {
//!     fn compare(&self, a: &String, b: &String) -> Ordering {
//!         a.to_lowercase().cmp(&b.to_lowercase())
//!     }
//! }
//!
//! let mut names: Vec<String> = Vec::new();
//! insert_all_sorted(&mut names, ["bob", "Alice", "carol"].map(String::from), &CaseInsensitive);
//! assert_eq!(names, vec!["Alice", "bob", "carol"]);
//!
//! let by_len = comparator(|a: &String, b| a.len().cmp(&b.len()));
//! let mut by_length: Vec<String> = Vec::new();
//! insert_all_sorted(&mut by_length, names, &by_len);
//! assert_eq!(by_length, vec!["bob", "Alice", "carol"]);
//! ```
//!
//! ### Bulk Operations
//!
//! ```rust
//! use seqsort::prelude::*;
//!
//! let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! remove_range(&mut data, 0, 2)?;
//! remove_where(&mut data, |&v| v % 2 == 0);
//! insert_range_at(&mut data, 1, [40, 41])?;
//!
//! assert_eq!(data, vec![3, 40, 41, 5, 7]);
//! assert_eq!(find_last_index(&data, |&v| v > 10), Some(2));
//! # Ok::<(), seqsort::SequenceError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Search**: O(log n) comparisons for [`binary_search`] and for finding an insertion
//!   point. Finding the last of `k` equal elements adds O(k).
//! - **Mutation**: insertions and removals cost whatever the container's `insert`/`remove`
//!   cost, O(n) element moves for `Vec`.
//! - **Memory**: no allocation beyond what the container itself does.
//!
//! Nothing is synchronized: every function borrows the sequence for the duration of the
//! call and keeps no state between calls.

pub mod algo;
pub mod bulk;
pub mod core;
pub mod error;
pub mod search;

pub use crate::algo::{
    binary_search, binary_search_range, insert_all_sorted, insert_all_sorted_with, insert_sorted,
    insert_sorted_with,
};
pub use crate::bulk::{append_all, insert_range_at, remove_range, remove_where};
pub use crate::core::{
    ByKey, Comparator, Natural, Placement, RandomAccess, Reversed, SearchResult, Sequence,
    comparator,
};
pub use crate::error::{Result, SequenceError};
pub use crate::search::{
    find_index, find_index_from, find_index_in, find_last_index, find_last_index_from,
    find_last_index_in, last_index_of,
};

pub mod prelude {
    pub use crate::algo::{
        binary_search, binary_search_range, insert_all_sorted, insert_all_sorted_with,
        insert_sorted, insert_sorted_with,
    };
    pub use crate::bulk::{append_all, insert_range_at, remove_range, remove_where};
    pub use crate::core::{
        ByKey, Comparator, Natural, Placement, RandomAccess, Reversed, SearchResult, Sequence,
        comparator,
    };
    pub use crate::error::SequenceError;
    pub use crate::search::{
        find_index, find_index_from, find_index_in, find_last_index, find_last_index_from,
        find_last_index_in, last_index_of,
    };
}
