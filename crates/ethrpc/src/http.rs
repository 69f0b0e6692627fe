use {
    crate::{
        Error,
        jsonrpc::{Request, Response},
        transport::Transport,
    },
    reqwest::{Client, Url, header},
    std::{
        fmt::{Debug, Formatter},
        sync::Arc,
    },
};

/// Sends JSON-RPC requests as HTTP POSTs.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    inner: Arc<Inner>,
}

struct Inner {
    url: Url,
    /// Name of the transport used in logs to distinguish different transports.
    name: String,
}

impl HttpTransport {
    pub fn new(client: Client, url: Url, name: String) -> Self {
        Self {
            client,
            inner: Arc::new(Inner { url, name }),
        }
    }

    pub fn url(&self) -> &Url {
        &self.inner.url
    }
}

impl Debug for HttpTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("name", &self.inner.name)
            .field("url", &self.inner.url)
            .finish()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let name = &self.inner.name;
        let id = request.id;
        let body = serde_json::to_string(&request).map_err(Error::InvalidParams)?;
        tracing::trace!(%name, %id, %body, "executing request");

        let mut request_builder = self
            .client
            .post(self.inner.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-RPC-REQUEST-ID", id.to_string())
            .header("X-RPC-METHOD", request.method.as_str())
            .body(body);
        if let Some(request_id) = observe::request_id::current() {
            request_builder = request_builder.header("X-REQUEST-ID", request_id);
        }

        let response = request_builder.send().await.map_err(|err| {
            tracing::warn!(%name, %id, %err, "failed to send request");
            Error::Transport(err.to_string())
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|err| {
            tracing::warn!(%name, %id, %err, "failed to get response body");
            Error::Transport(err.to_string())
        })?;
        // Log the raw text before decoding to get more information on responses that
        // aren't valid json.
        tracing::trace!(%name, %id, body = %text.trim(), "received response");
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "HTTP error {status}: {}",
                text.trim()
            )));
        }

        serde_json::from_str(&text).map_err(|source| Error::Decode {
            method: request.method,
            source,
        })
    }
}
