use crate::sync::{Condvar, LockResult, Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, ignoring poison.
///
/// Every critical section in this crate leaves the guarded collection
/// in a valid state even if it unwinds, so a panic in another thread
/// is no reason to fail here.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    unpoison(mutex.lock())
}

/// Blocks on `condvar` until notified, ignoring poison.
///
/// Spurious wake-ups are possible, so callers must re-check their condition.
#[cfg_attr(not(feature = "queue"), allow(dead_code))]
#[inline]
pub(crate) fn wait<'a, T>(condvar: &Condvar, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
    unpoison(condvar.wait(guard))
}

/// Consumes `mutex` and returns the data, ignoring poison.
#[inline]
pub(crate) fn into_inner<T>(mutex: Mutex<T>) -> T {
    unpoison(mutex.into_inner())
}

#[inline(always)]
fn unpoison<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(PoisonError::into_inner)
}
