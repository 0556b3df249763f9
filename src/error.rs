//! Error types for sequence operations.
//!
//! Every variant describes a caller mistake (an index or range that does not fit the
//! sequence). "Not found" is never an error; searches report it through `Option` or
//! [`SearchResult::NotFound`](crate::core::SearchResult::NotFound).

use thiserror::Error;

/// Invalid-argument conditions reported by range-taking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A single index points past the end of the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// The window `[index, index + count)` does not fit inside the sequence.
    #[error("range of {count} elements starting at {index} exceeds sequence length {len}")]
    RangeOutOfBounds {
        /// First index of the window.
        index: usize,
        /// Number of elements in the window.
        count: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// An operation that must touch at least one element was given `count == 0`.
    #[error("empty range requested at index {index}")]
    EmptyRange {
        /// Index at which the empty range was requested.
        index: usize,
    },
}

/// Result alias used by every fallible operation in this crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

/// Checks that `[index, index + count)` lies within a sequence of length `len`.
pub(crate) fn check_window(index: usize, count: usize, len: usize) -> Result<()> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(SequenceError::RangeOutOfBounds { index, count, len }),
    }
}
