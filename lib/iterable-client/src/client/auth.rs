use std::fmt;

use http::HeaderValue;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Error;

/// Secure wrapper for the Iterable API key that zeroes its memory on drop.
///
/// The key is immutable for the lifetime of a client instance and never appears
/// in `Debug` output.
///
/// ```rust
/// use iterable_client::ApiKey;
///
/// let key = ApiKey::new("secret");
/// assert_eq!(format!("{key:?}"), r#"ApiKey("[REDACTED]")"#);
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new API key from the provided value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Renders the key as the value of the `Api-Key` header.
    ///
    /// The header value is marked sensitive so intermediate layers do not log it.
    pub(crate) fn to_header_value(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&self.0)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_exposes_the_key() {
        let key = ApiKey::new("very-secret-key");
        let debug = format!("{key:?}");
        assert!(!debug.contains("very-secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn header_value_is_sensitive() {
        let key = ApiKey::new("abc123");
        let value = key.to_header_value().expect("a valid header value");
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().expect("ascii"), "abc123");
    }

    #[test]
    fn control_characters_are_rejected() {
        let key = ApiKey::new("bad\nkey");
        assert!(matches!(
            key.to_header_value(),
            Err(Error::InvalidHeaderValue(_))
        ));
    }
}
