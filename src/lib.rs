//! Instrumented binary max-heap for algorithmic-complexity analysis
//!
//! This crate provides an array-backed binary max-heap over `i64` keys whose
//! operations report every comparison, swap, and array access to a
//! per-instance metrics tracker. The counters make the classic complexity
//! bounds directly observable: push/pop/increase-key walk O(log n) levels,
//! while bulk construction is a single O(n) bottom-up pass.
//!
//! # Features
//!
//! - **`BinaryMaxHeap`**: insertion, maximum retrieval, extract-max, and
//!   in-place key increase over a growable backing array
//! - **`PerfTracker`**: per-heap comparison/swap/array-access counters plus
//!   wall-clock timers for the bulk-build phase
//! - **O(n) bulk construction** from an existing vector via bottom-up heapify
//!
//! # Example
//!
//! ```rust
//! use metered_heap::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::with_capacity(8);
//! for value in [10, 5, 15, 3, 7, 12, 20] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Ok(20));
//! assert_eq!(heap.pop(), Ok(20));
//! assert_eq!(heap.pop(), Ok(15));
//!
//! let snap = heap.metrics();
//! println!("{} comparisons, {} swaps", snap.comparisons, snap.swaps);
//! ```
//!
//! The `heap-bench` binary drives the heap interactively: a basic-operations
//! demo, a wall-clock benchmark over growing input sizes, an increase-key
//! demo, and a CSV table of per-size counter totals.

pub mod binary_max;
pub mod error;
pub mod metrics;

// Re-export the main types for convenience
pub use binary_max::BinaryMaxHeap;
pub use error::HeapError;
pub use metrics::{PerfCounters, PerfTracker};
