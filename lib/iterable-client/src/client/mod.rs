use headers::{ContentType, HeaderMapExt};
use http::header::HeaderName;
use http::{HeaderMap, Uri};
use serde_json::Value;
use url::Url;

use crate::catalog::{self, CallArgs, Operation};
use crate::catalog::request::ResolvedRequest;

mod builder;
pub use self::builder::IterableClientBuilder;

mod error;
pub use self::error::{Error, ErrorKind};

mod auth;
pub use self::auth::ApiKey;

mod transport;
pub use self::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};


/// HTTP client for the Iterable marketing API.
///
/// The client holds the base URI, the [`ApiKey`], and a [`Transport`]; all three
/// are immutable for its lifetime, so concurrent calls against one instance are
/// safe without locking. Each invocation is one stateless request: no retries,
/// no caching, no pagination handling beyond passing marker parameters through.
///
/// Use [`IterableClientBuilder`] to create production instances;
/// [`IterableClient::with_transport`] accepts a custom transport, which is how
/// the dispatch tests substitute a recording stub.
///
/// # Example
///
/// ```rust,no_run
/// use iterable_client::{CallArgs, IterableClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IterableClient::builder().with_api_key("secret").build()?;
///
/// let metrics = client
///     .execute(
///         "get_campaign_metrics",
///         CallArgs::new().arg("campaign_id", 8237),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IterableClient<T = HttpTransport> {
    transport: T,
    base_uri: Uri,
    api_key: ApiKey,
}

impl IterableClient {
    /// Starts building a client backed by the production [`HttpTransport`].
    pub fn builder() -> IterableClientBuilder {
        IterableClientBuilder::default()
    }
}

impl<T: Transport> IterableClient<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(transport: T, base_uri: Uri, api_key: impl Into<ApiKey>) -> Self {
        Self {
            transport,
            base_uri,
            api_key: api_key.into(),
        }
    }

    /// The base URI every request is issued against.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    /// Looks up an operation by its catalog name and dispatches it.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownOperation`] when the name has no catalog entry, plus
    /// everything [`dispatch`](Self::dispatch) can return.
    pub async fn execute(&self, operation: &str, args: CallArgs) -> Result<Value, Error> {
        let operation = catalog::find(operation).ok_or_else(|| Error::UnknownOperation {
            name: operation.to_string(),
        })?;
        self.dispatch(operation, args).await
    }

    /// Builds and performs one HTTP request for the given operation.
    ///
    /// Argument validation (declared names, path slots, enumerations, batch
    /// caps) happens before any network activity; a validation failure means
    /// the transport was never invoked.
    pub async fn dispatch(&self, operation: &'static Operation, args: CallArgs) -> Result<Value, Error> {
        let resolved = ResolvedRequest::build(operation, args)?;
        let url = self.build_url(&resolved)?;
        let body = resolved
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let request = TransportRequest {
            method: resolved.method,
            url,
            headers: self.headers()?,
            body,
        };

        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    /// Assembles the header set sent with every request.
    ///
    /// `Api-Key` and `Content-Type` are always present and never overridable.
    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("api-key"),
            self.api_key.to_header_value()?,
        );
        headers.typed_insert(ContentType::json());
        Ok(headers)
    }

    fn build_url(&self, resolved: &ResolvedRequest) -> Result<Url, Error> {
        let base_uri = self.base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            resolved.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !resolved.query.is_empty() {
            let query_string = serde_urlencoded::to_string(&resolved.query)?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }
}

/// Classifies one raw HTTP outcome into the success or failure the caller sees.
///
/// HTTP 200 with a JSON body is the only success shape; anything else is a
/// typed error, never an empty success.
fn decode_response(response: TransportResponse) -> Result<Value, Error> {
    let TransportResponse { status, body } = response;

    if status == http::StatusCode::OK {
        serde_json::from_str(&body).map_err(|error| Error::DecodeError { error, body })
    } else {
        Err(Error::RemoteError {
            status_code: status.as_u16(),
            body: serde_json::from_str(&body).ok(),
        })
    }
}
