//! Mutex helpers for the process-wide caches.
//!
//! The only shared state in the crate is memoization (the hex color cache).
//! A cache poisoned by a panicking thread still holds valid entries, so the
//! lock is recovered instead of propagating the poison.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub(crate) fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        log::warn!("recovered poisoned cache mutex");
        poisoned.into_inner()
    })
}
