use {
    crate::{
        Error,
        jsonrpc::{Request, Response},
    },
    std::sync::Arc,
};

/// Moves a single JSON-RPC request to a node and brings back its envelope.
///
/// Implementations only report failures to obtain a well-formed envelope.
/// An error object inside the envelope is a successful exchange as far as
/// the transport is concerned.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait::async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: Request) -> Result<Response, Error> {
        (**self).send(request).await
    }
}
