//! Production transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use super::transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};

/// [`HttpTransport`] over a shared `reqwest::Client`
///
/// The client is built without its own timeout; the per-attempt budget is
/// enforced above the transport so that scripted transports see the same
/// policy as the real one.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError::Connection(format!("invalid method: {e}")))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        debug!(url = %request.url, method = %request.method, "Executing HTTP request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
