//! Mockable transport for tests of code that issues RPC commands.

use {
    crate::{
        Error,
        jsonrpc::{Request, Response},
        transport::Transport,
    },
    serde_json::Value,
    std::{
        fmt::{self, Debug, Formatter},
        sync::{Arc, Mutex, MutexGuard},
    },
};

/// An intermediate trait used for `mockall` to automatically generate a mock
/// transport for us.
///
/// Returning `Err(Error::Rpc(..))` makes the node answer with an error
/// object. Any other error is reported as a failure of the transport itself.
#[mockall::automock]
pub trait MockableTransport {
    fn execute(&self, method: String, params: Vec<Value>) -> Result<Value, Error>;
}

#[derive(Clone, Default)]
pub struct MockTransport(Arc<Mutex<MockMockableTransport>>);

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock(&self) -> MutexGuard<'_, MockMockableTransport> {
        self.0.lock().unwrap()
    }
}

impl Debug for MockTransport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("MockTransport").finish()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let Request {
            id, method, params, ..
        } = request;
        match self.mock().execute(method, params) {
            Ok(result) => Ok(Response::success(id, result)),
            Err(Error::Rpc(error)) => Ok(Response::failure(id, error)),
            Err(err) => Err(err),
        }
    }
}
