use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

use crate::domain::DomainError;

/// Waits for `mutex` unless `cancel` fires first. An already-cancelled token
/// wins even when the lock is free.
pub(crate) async fn lock_or_cancel<'a, T>(
    mutex: &'a Mutex<T>,
    cancel: &CancellationToken,
) -> Result<MutexGuard<'a, T>, DomainError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(DomainError::Cancelled),
        guard = mutex.lock() => Ok(guard),
    }
}
