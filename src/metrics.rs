//! Operation counters and phase timers for complexity analysis.
//!
//! Every [`BinaryMaxHeap`](crate::binary_max::BinaryMaxHeap) owns exactly one
//! [`PerfTracker`] for its lifetime and reports each comparison, swap, and
//! array access it performs as a side effect. Callers read the accumulated
//! totals through [`PerfTracker::snapshot`], which yields a plain
//! [`PerfCounters`] value.
//!
//! Counters live in [`Cell`]s so that logically read-only heap operations
//! (`peek`) can record their cost through `&self`. The tracker is therefore
//! `!Sync`; the heap it instruments is single-threaded by design.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A point-in-time copy of all five instrumentation counters.
///
/// The merge timer is part of the contract for forward compatibility; no
/// operation currently drives it, so `merge_time` always reads zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerfCounters {
    /// Key comparisons performed by heap operations.
    pub comparisons: u64,
    /// Element swaps performed while restoring the heap invariant.
    pub swaps: u64,
    /// Individual reads and writes of the backing array.
    pub array_accesses: u64,
    /// Cumulative wall-clock time spent in bottom-up heap construction.
    pub build_time: Duration,
    /// Cumulative wall-clock time spent in merge passes (currently unused).
    pub merge_time: Duration,
}

/// Accumulates operation counts and phase timings for one heap instance.
///
/// All recording methods are infallible counter arithmetic or clock reads.
/// Counters are non-negative and non-decreasing between [`reset`](Self::reset)
/// calls; a single `reset` zeroes all five together.
#[derive(Debug, Default)]
pub struct PerfTracker {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    array_accesses: Cell<u64>,
    build_time: Cell<Duration>,
    merge_time: Cell<Duration>,
    build_started: Cell<Option<Instant>>,
    merge_started: Cell<Option<Instant>>,
}

impl PerfTracker {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the comparison counter.
    pub fn record_comparisons(&self, n: u64) {
        self.comparisons.set(self.comparisons.get() + n);
    }

    /// Adds one to the swap counter.
    pub fn record_swap(&self) {
        self.swaps.set(self.swaps.get() + 1);
    }

    /// Adds `n` to the array-access counter.
    pub fn record_array_accesses(&self, n: u64) {
        self.array_accesses.set(self.array_accesses.get() + n);
    }

    /// Marks the start of a bulk-build pass.
    pub fn start_build(&self) {
        self.build_started.set(Some(Instant::now()));
    }

    /// Accumulates the elapsed time since the matching [`start_build`].
    ///
    /// A call with no matching `start_build` is a no-op.
    ///
    /// [`start_build`]: Self::start_build
    pub fn end_build(&self) {
        if let Some(started) = self.build_started.take() {
            self.build_time.set(self.build_time.get() + started.elapsed());
        }
    }

    /// Marks the start of a merge pass.
    pub fn start_merge(&self) {
        self.merge_started.set(Some(Instant::now()));
    }

    /// Accumulates the elapsed time since the matching [`start_merge`].
    ///
    /// A call with no matching `start_merge` is a no-op.
    ///
    /// [`start_merge`]: Self::start_merge
    pub fn end_merge(&self) {
        if let Some(started) = self.merge_started.take() {
            self.merge_time.set(self.merge_time.get() + started.elapsed());
        }
    }

    /// Zeroes all five counters and discards any in-flight phase marks.
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.swaps.set(0);
        self.array_accesses.set(0);
        self.build_time.set(Duration::ZERO);
        self.merge_time.set(Duration::ZERO);
        self.build_started.set(None);
        self.merge_started.set(None);
    }

    /// Returns a read-only copy of all five counters.
    pub fn snapshot(&self) -> PerfCounters {
        PerfCounters {
            comparisons: self.comparisons.get(),
            swaps: self.swaps.get(),
            array_accesses: self.array_accesses.get(),
            build_time: self.build_time.get(),
            merge_time: self.merge_time.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let tracker = PerfTracker::new();

        tracker.record_comparisons(3);
        tracker.record_comparisons(2);
        tracker.record_swap();
        tracker.record_swap();
        tracker.record_array_accesses(7);

        let snap = tracker.snapshot();
        assert_eq!(snap.comparisons, 5);
        assert_eq!(snap.swaps, 2);
        assert_eq!(snap.array_accesses, 7);
        assert_eq!(snap.build_time, Duration::ZERO);
        assert_eq!(snap.merge_time, Duration::ZERO);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let tracker = PerfTracker::new();

        tracker.record_comparisons(10);
        tracker.record_swap();
        tracker.record_array_accesses(4);
        tracker.start_build();
        tracker.end_build();

        tracker.reset();
        assert_eq!(tracker.snapshot(), PerfCounters::default());
    }

    #[test]
    fn test_build_phase_accumulates() {
        let tracker = PerfTracker::new();

        tracker.start_build();
        std::thread::sleep(Duration::from_millis(1));
        tracker.end_build();
        let first = tracker.snapshot().build_time;
        assert!(first > Duration::ZERO);

        tracker.start_build();
        std::thread::sleep(Duration::from_millis(1));
        tracker.end_build();
        assert!(tracker.snapshot().build_time > first);
    }

    #[test]
    fn test_unmatched_end_is_noop() {
        let tracker = PerfTracker::new();

        tracker.end_build();
        tracker.end_merge();
        assert_eq!(tracker.snapshot(), PerfCounters::default());
    }

    #[test]
    fn test_merge_phase_is_independent() {
        let tracker = PerfTracker::new();

        tracker.start_merge();
        std::thread::sleep(Duration::from_millis(1));
        tracker.end_merge();
        let snap = tracker.snapshot();
        assert_eq!(snap.build_time, Duration::ZERO);
        assert!(snap.merge_time > Duration::ZERO);
    }
}
