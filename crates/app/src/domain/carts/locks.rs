//! Per-cart mutation locks.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::carts::records::CartUuid;

/// One async mutex per cart id. Mutations of the same cart are serialized,
/// mutations of different carts are not.
///
/// Entries are never evicted; carts are never deleted either, so the table
/// grows with the number of carts and no further.
#[derive(Debug, Default)]
pub(crate) struct CartLocks {
    locks: Mutex<FxHashMap<CartUuid, Arc<Mutex<()>>>>,
}

impl CartLocks {
    /// Wait for exclusive access to `cart`. Access ends when the guard is dropped.
    pub(crate) async fn acquire(&self, cart: CartUuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;

            Arc::clone(locks.entry(cart).or_default())
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
