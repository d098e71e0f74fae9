use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::queue::SegQueue;

/// Non-blocking queue of deferred work, fed by generation workers and drained by the
/// thread that owns the chunk.
///
/// Items pushed by the same producer keep their relative order. There is no ordering
/// guarantee between producers. `len` and `is_empty` are snapshots; a concurrent push
/// can make them stale immediately.
pub struct DeferredTaskQueue<T> {
    queue: SegQueue<T>,
    closed: AtomicBool,
}

impl<T> DeferredTaskQueue<T> {
    pub fn new() -> Self {
        DeferredTaskQueue {
            queue: SegQueue::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Returns false and drops `item` if the queue has been closed.
    pub fn push(&self, item: T) -> bool {
        if self.closed.load(Ordering::Acquire) {
            return false;
        }
        self.queue.push(item);
        true
    }

    pub fn try_pop(&self) -> Option<T> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Stops accepting new items. Items already queued can still be popped.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Discards every pending item and returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut removed = 0usize;
        while self.queue.pop().is_some() {
            removed += 1;
        }
        removed
    }
}

impl<T> Default for DeferredTaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
