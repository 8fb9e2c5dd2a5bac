//! Admission gate for concurrent generation streams
//!
//! A process-wide counter with a fixed ceiling. A slot must be acquired
//! before opening an upstream generation stream and is released when the
//! stream ends. Correctness depends only on atomic mutation of the counter,
//! so the gate works identically under OS threads and cooperative tasks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fixed-capacity admission gate.
///
/// Invariant: `0 <= count <= max` at all times, under arbitrary concurrent
/// callers. One instance lives for the whole process.
#[derive(Debug)]
pub struct AdmissionGate {
    count: AtomicUsize,
    max: usize,
}

impl AdmissionGate {
    /// Create a gate admitting at most `max` concurrent streams.
    pub fn new(max: usize) -> Self {
        Self {
            count: AtomicUsize::new(0),
            max,
        }
    }

    /// Non-blocking test-and-increment.
    ///
    /// Returns `true` and takes a slot if one is free; returns `false` with
    /// no side effect otherwise. Callers that get `false` must not call
    /// [`release`](Self::release).
    pub fn try_acquire(&self) -> bool {
        let mut current = self.count.load(Ordering::Acquire);
        loop {
            if current >= self.max {
                return false;
            }
            match self.count.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    /// Atomic decrement, floored at zero so a double release cannot
    /// underflow the counter.
    pub fn release(&self) {
        let _ = self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(1)
            });
    }

    /// Current number of held slots. Informational only: the value may be
    /// stale by the time the caller reads it, so never use it for admission
    /// decisions.
    pub fn snapshot(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Maximum number of concurrent slots.
    pub fn capacity(&self) -> usize {
        self.max
    }

    /// Acquire a slot as an RAII guard, or `None` if the gate is full.
    ///
    /// Dropping the guard releases the slot, which ties release to stream
    /// teardown: a client that disconnects mid-stream drops the response
    /// body, the generator, the guard, and therefore the slot.
    pub fn acquire_slot(self: &Arc<Self>) -> Option<SlotGuard> {
        if self.try_acquire() {
            Some(SlotGuard {
                gate: Arc::clone(self),
            })
        } else {
            None
        }
    }
}

/// One unit of the gate's concurrency budget, released on drop.
#[derive(Debug)]
pub struct SlotGuard {
    gate: Arc<AdmissionGate>,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.gate.release();
        tracing::debug!(
            active = self.gate.snapshot(),
            max = self.gate.capacity(),
            "connection released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_acquire_until_full() {
        let gate = AdmissionGate::new(2);
        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());
        assert_eq!(gate.snapshot(), 2);
    }

    #[test]
    fn test_release_frees_slot() {
        let gate = AdmissionGate::new(1);
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());
        gate.release();
        assert!(gate.try_acquire());
    }

    #[test]
    fn test_release_floors_at_zero() {
        let gate = AdmissionGate::new(4);
        gate.release();
        gate.release();
        assert_eq!(gate.snapshot(), 0);
        assert!(gate.try_acquire());
        assert_eq!(gate.snapshot(), 1);
    }

    #[test]
    fn test_failed_acquire_has_no_side_effect() {
        let gate = AdmissionGate::new(1);
        assert!(gate.try_acquire());
        for _ in 0..10 {
            assert!(!gate.try_acquire());
        }
        assert_eq!(gate.snapshot(), 1);
    }

    #[test]
    fn test_slot_guard_releases_on_drop() {
        let gate = Arc::new(AdmissionGate::new(1));
        let guard = gate.acquire_slot().unwrap();
        assert!(gate.acquire_slot().is_none());
        drop(guard);
        assert_eq!(gate.snapshot(), 0);
        assert!(gate.acquire_slot().is_some());
    }

    #[test]
    fn test_count_never_exceeds_max_under_contention() {
        let gate = Arc::new(AdmissionGate::new(8));
        let mut handles = Vec::new();

        for _ in 0..16 {
            let gate = Arc::clone(&gate);
            handles.push(thread::spawn(move || {
                let mut acquired = 0usize;
                for _ in 0..1000 {
                    if gate.try_acquire() {
                        acquired += 1;
                        assert!(gate.snapshot() <= gate.capacity());
                        gate.release();
                    }
                }
                acquired
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // Every acquire was paired with a release
        assert_eq!(gate.snapshot(), 0);
    }

    #[test]
    fn test_snapshot_tracks_acquire_release_pairs() {
        let gate = AdmissionGate::new(16);
        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
        assert_eq!(gate.snapshot(), 2);
        gate.release();
        assert_eq!(gate.snapshot(), 1);
        gate.release();
        assert_eq!(gate.snapshot(), 0);
    }
}
