//! Error type for heap operations.

use std::fmt;

/// Error type for heap operations
///
/// Every variant reflects caller misuse detected synchronously; none is
/// transient and none is retried. An error return leaves the heap in its
/// last invariant-satisfying state.
///
/// Allocation failure during growth is not represented here: it is not a
/// domain error, and the crate follows the standard library's convention of
/// aborting on out-of-memory rather than threading allocator errors through
/// every `push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` was invoked on an empty heap
    Empty,
    /// `increase_key` was given an index at or beyond the occupied length
    IndexOutOfBounds,
    /// `increase_key` was given a value below the currently stored key
    KeyNotIncreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::IndexOutOfBounds => {
                write!(f, "index is outside the occupied portion of the heap")
            }
            HeapError::KeyNotIncreased => {
                write!(f, "new key is less than the current key at this index")
            }
        }
    }
}

impl std::error::Error for HeapError {}
