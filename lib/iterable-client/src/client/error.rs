/// Errors that can occur when using the [`IterableClient`](super::IterableClient).
///
/// This enum covers all possible error conditions from network issues to argument
/// validation failures. All variants implement `std::error::Error`; use
/// [`Error::kind`] when only the broad class of failure matters.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum Error {
    /// HTTP transport failure from the underlying reqwest client.
    ///
    /// Occurs when the request never reaches the remote host: DNS resolution,
    /// TCP connect, TLS handshake, or timeout failures.
    TransportError(reqwest::Error),

    /// URL parsing error when constructing the request URL.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    ///
    /// Occurs when the base URI cannot be built from the configured parts.
    HttpError(http::Error),

    /// The API key contains characters that are invalid in an HTTP header.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error while encoding the request body.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// The client was built without an API key.
    #[display("An API key is required to build the client")]
    MissingApiKey,

    /// The requested operation name has no catalog entry.
    #[display("Unknown operation: {name}")]
    #[from(skip)]
    UnknownOperation {
        /// The operation name that was looked up.
        name: String,
    },

    /// An argument was supplied that the operation does not declare.
    #[display("Operation '{operation}' has no declared parameter named '{name}'")]
    #[from(skip)]
    UndeclaredParameter {
        /// The catalog name of the operation.
        operation: &'static str,
        /// The unrecognized argument name.
        name: String,
    },

    /// The path template still contains unfilled slots.
    ///
    /// Occurs when a required path parameter was not supplied; detected before
    /// any network activity.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that could not be resolved.
        path: String,
        /// The slot names left unfilled.
        missings: Vec<String>,
    },

    /// A value for an enumerated parameter is outside the permitted set.
    #[display("Invalid value {value:?} for parameter '{name}', expected one of {allowed:?}")]
    #[from(skip)]
    InvalidEnumValue {
        /// The local name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// The permitted values.
        allowed: &'static [&'static str],
    },

    /// A batched parameter exceeds the remote API's per-request cap.
    #[display("Parameter '{name}' holds {len} items, the API accepts at most {max} per request")]
    #[from(skip)]
    BatchTooLarge {
        /// The local name of the offending parameter.
        name: &'static str,
        /// The number of items supplied.
        len: usize,
        /// The per-request maximum.
        max: usize,
    },

    /// A numeric parameter exceeds its declared maximum.
    #[display("Parameter '{name}' value {value} exceeds the maximum of {max}")]
    #[from(skip)]
    ValueOutOfRange {
        /// The local name of the offending parameter.
        name: &'static str,
        /// The supplied value.
        value: i64,
        /// The inclusive maximum.
        max: i64,
    },

    /// A parameter value cannot be represented at its declared placement.
    ///
    /// Occurs when an object is used as a query value, a non-scalar as a path
    /// slot, and similar shape mismatches.
    #[display("Unsupported value for parameter '{name}': {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// The local name of the offending parameter.
        name: String,
        /// Description of the shape mismatch.
        message: String,
        /// The value that was rejected.
        value: serde_json::Value,
    },

    /// The remote host answered with a non-200 status code.
    ///
    /// Carries the decoded error payload when the response body was valid JSON.
    #[display("Server replied with status {status_code}")]
    #[from(skip)]
    RemoteError {
        /// The HTTP status code received.
        status_code: u16,
        /// The decoded error body, when parseable.
        body: Option<serde_json::Value>,
    },

    /// A 200 response whose body was not valid JSON.
    ///
    /// Kept distinct from [`Error::RemoteError`] so callers can tell "the API
    /// said no" apart from "the API said yes but sent garbage".
    #[display("Failed to decode response body as JSON: {error}\n{body}")]
    #[from(skip)]
    DecodeError {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input violates a declared constraint; no network call was made.
    Validation,
    /// The request could not reach the remote host.
    Transport,
    /// The remote host responded with a non-200 status.
    Remote,
    /// The response claimed success but its body was not valid JSON.
    Decode,
}

impl Error {
    /// Maps this error onto the four-way taxonomy of [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TransportError(_) => ErrorKind::Transport,
            Self::RemoteError { .. } => ErrorKind::Remote,
            Self::DecodeError { .. } => ErrorKind::Decode,
            _ => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn kind_maps_the_taxonomy() {
        let remote = Error::RemoteError {
            status_code: 404,
            body: None,
        };
        assert_eq!(remote.kind(), ErrorKind::Remote);

        let decode = Error::DecodeError {
            error: serde_json::from_str::<serde_json::Value>("<").unwrap_err(),
            body: "<".to_string(),
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);

        let validation = Error::UnknownOperation {
            name: "nope".to_string(),
        };
        assert_eq!(validation.kind(), ErrorKind::Validation);
    }

    #[test]
    fn enum_rejection_names_value_and_allowed_set() {
        let error = Error::InvalidEnumValue {
            name: "template_type",
            value: "Nope".to_string(),
            allowed: &["Base", "Blast"],
        };
        let message = error.to_string();
        assert!(message.contains("Nope"));
        assert!(message.contains("Base"));
        assert!(message.contains("Blast"));
    }
}
