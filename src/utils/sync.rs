//! Lock helpers

use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// Lock a mutex, recovering the inner value if a previous holder panicked.
///
/// None of the page helpers report errors to their callers, so a poisoned
/// lock is logged and then used as-is.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| {
        warn!("Recovering poisoned lock: {}", e);
        e.into_inner()
    })
}
