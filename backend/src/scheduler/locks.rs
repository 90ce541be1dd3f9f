//! Per-scope run serialization.
//!
//! Two runs over the same scope key (same week, same date range) would
//! race on the same upsert keys, so drivers take the scope's async lock
//! for the duration of the run. Distinct scopes proceed concurrently.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of named async locks.
#[derive(Default)]
pub struct ScopeLocks {
    inner: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl ScopeLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by the drivers.
    pub fn global() -> &'static ScopeLocks {
        static LOCKS: OnceLock<ScopeLocks> = OnceLock::new();
        LOCKS.get_or_init(ScopeLocks::new)
    }

    /// Acquire the lock for a scope key, waiting if another run holds it.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let handle = {
            let mut map = self.inner.lock();
            map.entry(key.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        handle.lock_owned().await
    }
}
