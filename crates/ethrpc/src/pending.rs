use {
    crate::Error,
    futures::FutureExt,
    std::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
        time::Duration,
    },
    tokio::task::JoinHandle,
    tracing::Instrument,
};

/// Handle to an RPC command that was already dispatched.
///
/// The request is in flight from the moment the handle is created, whether or
/// not it is ever awaited. Dropping the handle does not abort the request,
/// use [`PendingCall::cancel`] for that.
#[must_use = "the call is dispatched either way, await it to observe the result"]
pub struct PendingCall<T> {
    method: &'static str,
    handle: JoinHandle<Result<T, Error>>,
}

impl<T> PendingCall<T>
where
    T: Send + 'static,
{
    /// Spawns `future` onto the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub(crate) fn spawn<F>(method: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
    {
        let span = tracing::debug_span!("rpc", %method);
        Self {
            method,
            handle: observe::request_id::spawn(future.instrument(span)),
        }
    }
}

impl<T> PendingCall<T> {
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Whether the result is ready, so that awaiting it won't block.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Aborts the request. Awaiting a cancelled call yields
    /// [`Error::Cancelled`] unless it had already completed.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits at most `timeout` for the result. On expiry the request is
    /// aborted and [`Error::Timeout`] returned.
    pub async fn with_deadline(self, timeout: Duration) -> Result<T, Error> {
        let method = self.method;
        let abort = self.handle.abort_handle();
        match tokio::time::timeout(timeout, self).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!(%method, ?timeout, "rpc call timed out");
                abort.abort();
                Err(Error::Timeout(timeout))
            }
        }
    }
}

impl<T> Future for PendingCall<T> {
    type Output = Result<T, Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let method = self.method;
        self.handle.poll_unpin(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(err) => {
                if err.is_panic() {
                    tracing::error!(%method, "rpc task panicked");
                }
                Err(Error::Cancelled)
            }
        })
    }
}

impl<T> std::fmt::Debug for PendingCall<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCall")
            .field("method", &self.method)
            .field("finished", &self.is_finished())
            .finish()
    }
}
