use std::fmt::Debug;
use std::time::Duration;

use http::Uri;
use http::uri::Scheme;

use super::{ApiKey, Error, HttpTransport, IterableClient};

/// Builder for creating [`IterableClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTPS
/// - **Host**: `api.iterable.com`
/// - **Port**: 443
/// - **Timeout**: none (the transport waits indefinitely)
///
/// The API key is the only required setting; [`build`](Self::build) fails
/// without one.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use iterable_client::IterableClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IterableClient::builder()
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IterableClientBuilder {
    scheme: Scheme,
    host: String,
    port: u16,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
}

impl Default for IterableClientBuilder {
    fn default() -> Self {
        Self {
            scheme: Scheme::HTTPS,
            host: "api.iterable.com".to_string(),
            port: 443,
            api_key: None,
            timeout: None,
        }
    }
}

impl IterableClientBuilder {
    /// Sets the HTTP scheme.
    ///
    /// Defaults to HTTPS; HTTP is only useful when pointing the client at a
    /// local test server.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname of the API server.
    ///
    /// Defaults to `api.iterable.com`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port to connect to.
    ///
    /// Defaults to 443.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the API key sent as the `Api-Key` header on every request.
    pub fn with_api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets a total per-request timeout on the underlying transport.
    ///
    /// The dispatcher itself imposes no timeout policy; an elapsed timeout
    /// surfaces as [`Error::TransportError`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the final [`IterableClient`].
    ///
    /// # Errors
    ///
    /// Fails when no API key was provided, when the scheme/host/port do not form
    /// a valid URI, or when the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<IterableClient, Error> {
        let Self {
            scheme,
            host,
            port,
            api_key,
            timeout,
        } = self;

        let api_key = api_key.ok_or(Error::MissingApiKey)?;

        let base_uri = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"))
            .path_and_query("/")
            .build()?;

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            client = client.timeout(timeout);
        }
        let client = client.build()?;

        Ok(IterableClient::with_transport(
            HttpTransport::new(client),
            base_uri,
            api_key,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_iterable_host() {
        let client = IterableClientBuilder::default()
            .with_api_key("key")
            .build()
            .expect("a client");

        assert_eq!(
            client.base_uri().to_string(),
            "https://api.iterable.com:443/"
        );
    }

    #[test]
    fn api_key_is_required() {
        let result = IterableClientBuilder::default().build();
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn scheme_host_and_port_are_configurable() {
        let client = IterableClientBuilder::default()
            .with_scheme(Scheme::HTTP)
            .with_host("localhost")
            .with_port(8080)
            .with_api_key("key")
            .build()
            .expect("a client");

        assert_eq!(client.base_uri().to_string(), "http://localhost:8080/");
    }
}
