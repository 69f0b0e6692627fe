use {crate::jsonrpc::ErrorObject, std::time::Duration, thiserror::Error};

/// Everything that can go wrong between issuing an RPC command and getting
/// its typed result.
#[derive(Debug, Error)]
pub enum Error {
    /// The node could not be reached or did not answer with a 2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object.
    #[error("node error: {0}")]
    Rpc(ErrorObject),

    /// The response was not a JSON-RPC envelope or its result did not have
    /// the shape expected for the method.
    #[error("failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize parameters: {0}")]
    InvalidParams(#[source] serde_json::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("call was cancelled before completing")]
    Cancelled,
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The node supplied error, if this is one.
    pub fn rpc_error(&self) -> Option<&ErrorObject> {
        match self {
            Self::Rpc(error) => Some(error),
            _ => None,
        }
    }
}
