//! The `trace_*` command group. Requires a node with the trace module
//! enabled.

use {
    crate::{client::RpcClient, pending::PendingCall},
    model::{TraceList, TransactionId},
};

#[derive(Clone, Copy, Debug)]
pub struct TraceCommands<'a> {
    client: &'a RpcClient,
}

impl<'a> TraceCommands<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Every call and create executed by the transaction. Resolves to an
    /// empty list for unknown transactions.
    pub fn get_transaction(&self, id: TransactionId) -> PendingCall<TraceList> {
        self.client.call("trace_transaction", (id,))
    }
}
