//! Task-local request identifier.
//!
//! An application handling some external request can scope its work with an
//! identifier. Every RPC call issued from within that scope forwards the
//! identifier to the node in the `X-REQUEST-ID` header, so node side logs
//! can be correlated with ours. The identifier survives the hop onto the
//! task that performs the RPC exchange as long as the task is started with
//! [`spawn`].

use {std::future::Future, tokio::task::JoinHandle};

tokio::task_local! {
    static REQUEST_ID: String;
}

/// The identifier of the current task, if one was set.
pub fn current() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

/// Runs `future` with `id` as its request identifier.
pub async fn scope<F>(id: String, future: F) -> F::Output
where
    F: Future,
{
    REQUEST_ID.scope(id, future).await
}

/// Spawns `future` onto the Tokio runtime, carrying over the request
/// identifier of the calling task.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match current() {
        Some(id) => tokio::task::spawn(REQUEST_ID.scope(id, future)),
        None => tokio::task::spawn(future),
    }
}
