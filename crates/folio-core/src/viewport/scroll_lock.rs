//! Reference-counted page scroll lock
//!
//! Every open overlay holds a [`ScrollLockGuard`]. The page is locked while
//! at least one guard is alive; dropping the last one unlocks it, whatever
//! path the overlay took to close.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared lock handle. Clones refer to the same counter.
#[derive(Debug, Clone)]
pub struct ScrollLock {
    holders: Arc<watch::Sender<usize>>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollLock {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            holders: Arc::new(tx),
        }
    }

    /// Take a hold on the lock. Released when the guard drops.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.send_modify(|count| {
            *count += 1;
            if *count == 1 {
                tracing::debug!("Scroll lock engaged");
            }
        });
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        *self.holders.borrow()
    }

    /// Receive the holder count whenever it changes
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.holders.subscribe()
    }
}

/// Proof of a hold on a [`ScrollLock`]
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Arc<watch::Sender<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.send_modify(|count| {
            *count = count.saturating_sub(1);
            if *count == 0 {
                tracing::debug!("Scroll lock released");
            }
        });
    }
}
