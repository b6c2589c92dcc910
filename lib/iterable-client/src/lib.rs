//! # iterable-client
//!
//! Catalog-driven HTTP client for the [Iterable](https://api.iterable.com) marketing API.
//!
//! Every remote operation is described by one entry in an immutable, process-wide
//! [catalog]. A single dispatcher resolves the entry's path template, places the
//! caller's arguments into the query string or JSON body under their wire names,
//! attaches the `Api-Key` header, and classifies the outcome into a typed [`Error`].
//! Adding a new remote operation means adding one catalog entry, not one method.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iterable_client::{CallArgs, IterableClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IterableClient::builder()
//!     .with_api_key("secret")
//!     .build()?;
//!
//! // No arguments
//! let lists = client.execute("get_lists", CallArgs::new()).await?;
//!
//! // Arguments use their local names; the catalog maps them to wire names
//! // (`data_fields` → `dataFields`) and to their declared placement.
//! let updated = client
//!     .execute(
//!         "update_user",
//!         CallArgs::new()
//!             .arg("email", "ada@example.com")
//!             .arg("data_fields", serde_json::json!({ "plan": "pro" })),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error taxonomy
//!
//! Every failure is a typed [`Error`]; [`Error::kind`] collapses the variants into
//! four classes:
//!
//! - [`ErrorKind::Validation`] - bad arguments, rejected before any network call
//! - [`ErrorKind::Transport`] - the request never reached the host
//! - [`ErrorKind::Remote`] - a non-200 response, with the decoded error body
//! - [`ErrorKind::Decode`] - a 200 response whose body was not valid JSON
//!
//! Absent arguments are omitted from the outgoing request entirely; an explicitly
//! supplied JSON `null` is sent as `null`. The distinction matters for partial
//! updates, where a present null and an absent field mean different things.

pub mod catalog;

mod client;

pub use self::catalog::{
    CallArgs, Constraint, MessageMedium, Operation, Param, Placement, TemplateType,
};
pub use self::client::{
    ApiKey, Error, ErrorKind, HttpTransport, IterableClient, IterableClientBuilder, Transport,
    TransportRequest, TransportResponse,
};
