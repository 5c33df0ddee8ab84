//! Per-item write serialization for the booking engine.
//!
//! Booking creation and decisions read item and booking state, decide, and then write.
//! `ItemLocks` hands out one async mutex per item so that two such sections touching the
//! same item never interleave, while sections on different items proceed in parallel.
//! The lock table lives in memory and only serializes requests within one server process.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Number of tracked items above which idle locks are dropped on the next acquire.
const PRUNE_THRESHOLD: usize = 1024;

/// Table of per-item async mutexes shared through application state.
///
/// Cloning is cheap and every clone refers to the same table.
#[derive(Clone, Default)]
pub struct ItemLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl ItemLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to an item.
    ///
    /// The returned guard releases the item when dropped. The table lock itself is only
    /// held while looking up the item's mutex, never while waiting on it.
    ///
    /// # Arguments
    /// - `item_id` - ID of the item to serialize on
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Guard holding the item's lock
    pub async fn acquire(&self, item_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;

            if locks.len() > PRUNE_THRESHOLD {
                // Only the table holds a reference to idle locks.
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }

            locks.entry(item_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Number of items currently tracked in the table.
    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
