use std::future::Future;

use tokio::task::JoinError;

use crate::callback::Callback;
use crate::error::Abandoned;

/// Run `task` on the current Tokio runtime and report its outcome through `callback`.
///
/// The callback fires exactly once. If the task panics or is cancelled it
/// receives `E::from(Abandoned)`.
pub fn spawn_with<T, E, F>(task: F, callback: Callback<T, E>)
where
    T: Send + 'static,
    E: From<Abandoned> + Send + 'static,
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    let work = tokio::spawn(task);
    tokio::spawn(async move { callback(joined(work.await)) });
}

/// Like [`spawn_with`], but runs `task` on the blocking pool.
pub fn spawn_blocking_with<T, E, F>(task: F, callback: Callback<T, E>)
where
    T: Send + 'static,
    E: From<Abandoned> + Send + 'static,
    F: FnOnce() -> Result<T, E> + Send + 'static,
{
    let work = tokio::task::spawn_blocking(task);
    tokio::spawn(async move { callback(joined(work.await)) });
}

fn joined<T, E: From<Abandoned>>(outcome: Result<Result<T, E>, JoinError>) -> Result<T, E> {
    outcome.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "task ended without an outcome");
        Err(E::from(Abandoned))
    })
}
