//! Transport wrapper that logs every call and records per-method metrics.

use {
    crate::{
        Error,
        jsonrpc::{Payload, Request, Response},
        transport::Transport,
    },
    std::fmt::{self, Debug, Formatter},
};

pub struct InstrumentedTransport<T> {
    name: String,
    inner: T,
    metrics: &'static Metrics,
}

impl<T> InstrumentedTransport<T> {
    pub fn new(name: String, inner: T) -> Self {
        Self {
            name,
            inner,
            metrics: Metrics::instance(observe::metrics::get_storage_registry()).unwrap(),
        }
    }
}

impl<T> Debug for InstrumentedTransport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedTransport")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait::async_trait]
impl<T> Transport for InstrumentedTransport<T>
where
    T: Transport,
{
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let method = request.method.clone();
        let id = request.id;
        let _timer = self.metrics.on_request_start(&self.name, &method);
        tracing::trace!(name = %self.name, %id, %method, "sending request");

        let result = self.inner.send(request).await;
        let outcome = match &result {
            Ok(Response {
                payload: Payload::Result(_),
                ..
            }) => "success",
            Ok(Response {
                payload: Payload::Error(error),
                ..
            }) => {
                tracing::debug!(name = %self.name, %id, %method, %error, "node returned error");
                "node_error"
            }
            Err(err) => {
                tracing::debug!(name = %self.name, %id, %method, %err, "request failed");
                "transport_error"
            }
        };
        self.metrics
            .requests_outcome
            .with_label_values(&[self.name.as_str(), method.as_str(), outcome])
            .inc();
        result
    }
}

#[derive(prometheus_metric_storage::MetricStorage, Clone, Debug)]
#[metric(subsystem = "ethrpc")]
struct Metrics {
    /// Number of inflight RPC requests for ethereum node.
    #[metric(labels("component", "method"))]
    requests_inflight: prometheus::IntGaugeVec,

    /// Number of completed RPC requests for ethereum node.
    #[metric(labels("component", "method"))]
    requests_complete: prometheus::IntCounterVec,

    /// Execution time for each RPC request.
    #[metric(labels("component", "method"))]
    requests_duration_seconds: prometheus::HistogramVec,

    /// Completed RPC requests by whether the node answered with a result, an
    /// error object, or could not be reached.
    #[metric(labels("component", "method", "outcome"))]
    requests_outcome: prometheus::IntCounterVec,
}

impl Metrics {
    #[must_use]
    fn on_request_start(&self, label: &str, method: &str) -> impl Drop + use<> {
        let requests_inflight = self.requests_inflight.with_label_values(&[label, method]);
        let requests_complete = self.requests_complete.with_label_values(&[label, method]);
        let requests_duration_seconds = self
            .requests_duration_seconds
            .with_label_values(&[label, method]);

        requests_inflight.inc();
        let timer = requests_duration_seconds.start_timer();

        scopeguard::guard(timer, move |timer| {
            requests_inflight.dec();
            requests_complete.inc();
            timer.stop_and_record();
        })
    }
}
