// SPDX-License-Identifier: MPL-2.0
//! Page-level scroll lock.
//!
//! The page scrolls freely while no [`ScrollLockGuard`] is alive. A view that
//! needs to suspend background scrolling (the lightbox) acquires a guard and
//! keeps it for as long as it needs the lock; dropping the guard releases it,
//! so closing the view, replacing its state, or tearing it down all restore
//! scrolling without a separate "unlock" call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared scroll lock owned by the page.
///
/// Cloning yields another handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock. Scrolling stays suspended until the guard is dropped.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns `true` while at least one guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// Proof that the page scroll is suspended. Releases the lock on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_free() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn guard_holds_lock_until_dropped() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_share_state() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        let _guard = other.acquire();
        assert!(lock.is_locked());
        assert_eq!(lock.holders(), 1);
    }

    #[test]
    fn nested_guards_release_independently() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
