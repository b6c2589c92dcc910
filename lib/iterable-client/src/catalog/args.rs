use indexmap::IndexMap;
use serde_json::Value;

/// The arguments of one invocation, keyed by local parameter name.
///
/// Arguments that are never added stay absent from the outgoing request
/// entirely. An explicitly added `Value::Null` is sent as JSON `null`; the
/// remote API treats a present null and an absent field differently on partial
/// updates, so the two must never be conflated.
///
/// # Example
///
/// ```rust
/// use iterable_client::CallArgs;
///
/// let limit: Option<i64> = None;
/// let args = CallArgs::new()
///     .arg("email", "ada@example.com")
///     .opt("limit", limit); // absent, not null
/// assert_eq!(args.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    values: IndexMap<String, Value>,
}

impl CallArgs {
    /// Creates an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument under its local name.
    ///
    /// Accepts anything convertible to a JSON value: strings, numbers, bools,
    /// arrays, `serde_json::json!` objects, and the catalog enums.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Adds an argument only when the value is `Some`.
    ///
    /// `None` leaves the argument absent, which is not the same as null.
    pub fn opt<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    /// The number of supplied arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for CallArgs {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
