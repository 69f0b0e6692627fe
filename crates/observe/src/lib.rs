//! Observability plumbing shared by the RPC client and its users: logging
//! initialization, the global metrics registry and request id propagation.
pub mod config;
pub mod metrics;
pub mod request_id;
pub mod tracing;
