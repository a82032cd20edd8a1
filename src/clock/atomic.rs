//! Shared mutable timestamp storage
//!
//! [`CompactTimestamp`] is a plain `Copy` value. Locations shared between
//! threads hold an [`AtomicTimestamp`] instead and are only accessed through
//! its atomic operations. All operations are sequentially consistent and
//! lock-free; ordering against other state is left to the caller.

use core::sync::atomic::{AtomicI64, Ordering};

use super::timestamp::CompactTimestamp;

/// Atomically accessed timestamp
///
/// # Example
/// ```rust
/// use tinystamp::prelude::*;
///
/// let last_seen = AtomicTimestamp::new(CompactTimestamp::new(10));
/// let old = last_seen.swap(CompactTimestamp::new(20));
/// assert_eq!(old, CompactTimestamp::new(10));
///
/// // stale expected value, nothing is written
/// assert!(!last_seen.compare_and_swap(old, CompactTimestamp::new(30)));
/// assert!(last_seen.compare_and_swap(CompactTimestamp::new(20), CompactTimestamp::new(30)));
/// assert_eq!(last_seen.load(), CompactTimestamp::new(30));
/// ```
#[derive(Debug, Default)]
pub struct AtomicTimestamp {
    inner: AtomicI64,
}

impl AtomicTimestamp {
    /// Creates a new atomic timestamp holding `ts`
    pub const fn new(ts: CompactTimestamp) -> Self {
        Self {
            inner: AtomicI64::new(ts.value),
        }
    }

    /// Replaces the stored timestamp
    pub fn store(&self, ts: CompactTimestamp) {
        self.inner.store(ts.value, Ordering::SeqCst);
    }

    /// Reads the stored timestamp
    pub fn load(&self) -> CompactTimestamp {
        CompactTimestamp::new(self.inner.load(Ordering::SeqCst))
    }

    /// Stores `ts` and returns the previous timestamp
    pub fn swap(&self, ts: CompactTimestamp) -> CompactTimestamp {
        CompactTimestamp::new(self.inner.swap(ts.value, Ordering::SeqCst))
    }

    /// Stores `new` if the current timestamp equals `current`
    ///
    /// Returns true if the value was replaced.
    pub fn compare_and_swap(&self, current: CompactTimestamp, new: CompactTimestamp) -> bool {
        self.inner
            .compare_exchange(current.value, new.value, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Returns the stored timestamp through exclusive access
    pub fn get(&mut self) -> CompactTimestamp {
        CompactTimestamp::new(*self.inner.get_mut())
    }

    /// Replaces the stored timestamp through exclusive access
    pub fn set(&mut self, ts: CompactTimestamp) {
        *self.inner.get_mut() = ts.value;
    }

    /// Consumes the cell and returns the stored timestamp
    pub fn into_inner(self) -> CompactTimestamp {
        CompactTimestamp::new(self.inner.into_inner())
    }
}

impl From<CompactTimestamp> for AtomicTimestamp {
    fn from(ts: CompactTimestamp) -> Self {
        Self::new(ts)
    }
}
