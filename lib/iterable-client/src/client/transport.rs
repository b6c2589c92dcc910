use std::future::Future;

use http::{HeaderMap, Method, StatusCode};
use reqwest::Body;
use tracing::debug;
use url::Url;

use super::Error;

/// One fully assembled outbound HTTP request.
///
/// Headers already include `Api-Key` and `Content-Type`; the body, when present,
/// is serialized JSON.
#[derive(Debug)]
pub struct TransportRequest {
    /// The HTTP verb.
    pub method: Method,
    /// The absolute request URL, query string included.
    pub url: Url,
    /// The complete outgoing header set.
    pub headers: HeaderMap,
    /// The serialized JSON body, if the operation carries one.
    pub body: Option<String>,
}

/// The raw outcome of one HTTP exchange: status code and body text.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The raw response body.
    pub body: String,
}

/// Capability consumed by the dispatcher to perform one HTTP exchange.
///
/// [`HttpTransport`] is the production implementation; tests substitute a stub
/// that records requests and replays canned responses.
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw status and body.
    ///
    /// Implementations perform no retries and no response interpretation; status
    /// classification belongs to the dispatcher.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, Error>> + Send;
}

/// Production [`Transport`] backed by a shared `reqwest::Client`.
///
/// Connection pooling and timeouts are configured on the inner client; see
/// [`IterableClientBuilder::with_timeout`](super::IterableClientBuilder::with_timeout).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wraps an already configured `reqwest::Client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let TransportRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut outgoing = reqwest::Request::new(method, url);
        *outgoing.headers_mut() = headers;
        if let Some(body) = body {
            *outgoing.body_mut() = Some(Body::from(body));
        }

        debug!(?outgoing, "sending...");
        let response = self.client.execute(outgoing).await?;
        debug!(?response, "...receiving");

        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
