//! JSON-RPC client for Ethereum Classic nodes.
//!
//! Commands are grouped the way the node groups them: [`RpcClient::eth`] and
//! [`RpcClient::trace`]. Each command is sent immediately and returns a
//! [`PendingCall`] that resolves to the decoded result or an [`Error`].

pub mod arguments;
pub mod client;
pub mod error;
pub mod eth;
pub mod http;
pub mod instrumented;
pub mod jsonrpc;
pub mod mock;
pub mod pending;
pub mod trace;
pub mod transport;

pub use {
    arguments::Arguments,
    client::RpcClient,
    error::Error,
    eth::EthCommands,
    http::HttpTransport,
    instrumented::InstrumentedTransport,
    pending::PendingCall,
    trace::TraceCommands,
    transport::Transport,
};
