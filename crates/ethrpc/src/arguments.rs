use {
    crate::{client::RpcClient, http::HttpTransport, instrumented::InstrumentedTransport},
    reqwest::{ClientBuilder, Url},
    std::{
        fmt::{self, Display, Formatter},
        time::Duration,
    },
};

const USER_AGENT: &str = concat!("etherjar-rs/", env!("CARGO_PKG_VERSION"));

/// Command line arguments for connecting to a node.
#[derive(clap::Parser, Clone, Debug)]
#[group(skip)]
pub struct Arguments {
    /// JSON-RPC endpoint of the node.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Timeout for a single HTTP request to the node.
    #[clap(
        long,
        env,
        default_value = "10s",
        value_parser = humantime::parse_duration,
    )]
    pub node_timeout: Duration,

    /// Name of the connection in logs and metrics.
    #[clap(long, env, default_value = "node")]
    pub node_label: String,
}

impl Arguments {
    /// Creates a client that talks HTTP to the configured node and records
    /// metrics for every call.
    pub fn client(&self) -> reqwest::Result<RpcClient> {
        let http = ClientBuilder::new()
            .timeout(self.node_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        let transport = HttpTransport::new(http, self.node_url.clone(), self.node_label.clone());
        Ok(RpcClient::new(InstrumentedTransport::new(
            self.node_label.clone(),
            transport,
        )))
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            node_url,
            node_timeout,
            node_label,
        } = self;

        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "node_timeout: {node_timeout:?}")?;
        writeln!(f, "node_label: {node_label}")?;
        Ok(())
    }
}
