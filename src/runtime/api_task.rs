//! Spawned backend calls.
//!
//! Each backend operation runs on the tokio runtime and hands its result
//! back through a oneshot channel, so callers can start several requests and
//! join them later without holding the client borrowed.

use crate::github::error::{GitHubError, GitHubResult};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A handle to a spawned backend call that resolves to its result.
///
/// A task whose worker was dropped before sending resolves to
/// [`GitHubError::TaskAborted`].
pub struct ApiTask<T> {
    rx: oneshot::Receiver<GitHubResult<T>>,
}

impl<T> ApiTask<T>
where
    T: Send + 'static,
{
    /// Create from oneshot receiver (for advanced use).
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<GitHubResult<T>>) -> Self {
        Self { rx }
    }

    /// Spawn a backend call on the current tokio runtime.
    #[inline]
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = GitHubResult<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::new(rx)
    }
}

impl<T> Future for ApiTask<T> {
    type Output = GitHubResult<T>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(GitHubError::TaskAborted)),
            Poll::Pending => Poll::Pending,
        }
    }
}
