use {
    crate::{
        Error,
        eth::EthCommands,
        jsonrpc::Request,
        pending::PendingCall,
        trace::TraceCommands,
        transport::Transport,
    },
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fmt::{self, Debug, Formatter},
        sync::{
            Arc,
            atomic::{AtomicU64, Ordering},
        },
    },
};

/// Entry point for talking to a node.
///
/// Cloning is cheap, clones share the transport and the request id counter.
#[derive(Clone)]
pub struct RpcClient {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(transport: impl Transport) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport: Arc::new(transport),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn eth(&self) -> EthCommands<'_> {
        EthCommands::new(self)
    }

    pub fn trace(&self) -> TraceCommands<'_> {
        TraceCommands::new(self)
    }

    /// Issues `method` with the given positional parameters and decodes its
    /// result into `T`.
    ///
    /// `params` is usually a tuple, which serializes to a JSON array. `()`
    /// sends no parameters and any other value is sent as the only one.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<P, T>(&self, method: &'static str, params: P) -> PendingCall<T>
    where
        P: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let params = serde_json::to_value(params).map(|params| match params {
            Value::Array(params) => params,
            Value::Null => Vec::new(),
            param => vec![param],
        });
        let transport = self.inner.transport.clone();

        PendingCall::spawn(method, async move {
            let request = Request::new(id, method, params.map_err(Error::InvalidParams)?);
            let result = transport.send(request).await?.into_result()?;
            serde_json::from_value(result).map_err(|source| {
                tracing::debug!(%method, %id, %source, "unexpected result shape");
                Error::Decode {
                    method: method.to_owned(),
                    source,
                }
            })
        })
    }
}

impl Debug for RpcClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("next_id", &self.inner.next_id.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
