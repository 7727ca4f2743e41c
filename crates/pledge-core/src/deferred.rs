use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::FutureExt;
use futures_util::future::Shared;
use tokio::sync::oneshot;

use crate::callback::Callback;
use crate::error::Abandoned;

/// Handle to a value that is settled exactly once, either resolved or rejected.
///
/// Awaiting yields `Ok` on resolution and `Err` on rejection. If the
/// [`Settler`] is dropped unsettled the handle rejects with `E::from(Abandoned)`.
#[must_use = "a deferred value does nothing unless awaited"]
pub struct Deferred<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
}

/// Producer half of a [`Deferred`].
///
/// Every settling method takes `self`, so at most one outcome is ever delivered.
pub struct Settler<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Deferred<T, E> {
    /// Create a deferred value and hand its settler to `executor`.
    ///
    /// The executor runs before this returns. It may settle immediately or
    /// move the settler elsewhere to settle later.
    pub fn new<F>(executor: F) -> Self
    where
        F: FnOnce(Settler<T, E>),
    {
        let (tx, rx) = oneshot::channel();
        executor(Settler { tx });
        Self { rx }
    }

    /// A deferred value that is already resolved.
    pub fn resolved(value: T) -> Self { Self::new(|settler| settler.resolve(value)) }

    /// A deferred value that is already rejected.
    pub fn rejected(error: E) -> Self { Self::new(|settler| settler.reject(error)) }

    /// Convert into a cloneable handle; every clone observes the same outcome.
    pub fn shared(self) -> Shared<Self>
    where
        T: Clone,
        E: Clone + From<Abandoned>,
    {
        FutureExt::shared(self)
    }
}

impl<T, E> Future for Deferred<T, E>
where
    E: From<Abandoned>,
{
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(E::from(Abandoned))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T, E> Settler<T, E> {
    pub fn resolve(self, value: T) { self.settle(Ok(value)) }

    pub fn reject(self, error: E) { self.settle(Err(error)) }

    /// Deliver `outcome`. A handle that was already dropped simply never sees it.
    pub fn settle(self, outcome: Result<T, E>) {
        if self.tx.send(outcome).is_err() {
            tracing::trace!("deferred value settled after its handle was dropped");
        }
    }

    /// Whether the consuming handle has been dropped.
    pub fn is_abandoned(&self) -> bool { self.tx.is_closed() }
}

impl<T, E> Settler<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Adapt this settler into a completion callback.
    pub fn into_callback(self) -> Callback<T, E> { Box::new(move |outcome| self.settle(outcome)) }
}

impl<T, E> fmt::Debug for Settler<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settler")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}
