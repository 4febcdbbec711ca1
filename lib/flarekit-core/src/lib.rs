//! # Flarekit Core
//!
//! Fluent request builder for the Cloudflare v4 REST API.
//!
//! A [`CloudflareAccess`] holds the connection context (base URL, credentials,
//! HTTP transport). Each call starts a [`CloudflareRequest`] from it with a
//! method and a path template, then adds identifiers, query parameters and
//! body fields before sending.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flarekit_core::{CloudflareAccess, HttpMethod};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads CLOUDFLARE_API_TOKEN (or CLOUDFLARE_EMAIL and CLOUDFLARE_API_KEY)
//! let access = CloudflareAccess::from_env()?;
//!
//! let response = access
//!     .call(HttpMethod::Get, "zones/{id-1}/dns_records")
//!     .with_identifier("023e105f4ecef8ad9ca31a8372d0c353")
//!     .with_query_param("type", "A")
//!     .with_query_param("per_page", 50)
//!     .send()?;
//!
//! for error in &response.body().errors {
//!     eprintln!("{}: {}", error.code, error.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Path Templates
//!
//! Paths are relative to the base URL (`https://api.cloudflare.com/client/v4/`
//! by default) and use positional placeholders: `{id-1}` is the first
//! identifier, `{id-2}` the second. Identifiers are percent-encoded. A
//! placeholder without identifier is sent as is, see [`CallPath`].
//!
//! Common endpoints are listed in [`Category`]:
//!
//! ```rust,no_run
//! use flarekit_core::{Category, CloudflareAccess};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let access = CloudflareAccess::from_env()?;
//! let response = access
//!     .request(Category::PatchDnsRecord)
//!     .with_identifiers(["023e105f4ecef8ad9ca31a8372d0c353", "372e67954025e0ba6aaa6d586b9e0b59"])
//!     .with_body_field("content", "192.0.2.1")
//!     .with_body_json("proxied", true)
//!     .send()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Query and Body
//!
//! - Query parameters and body fields are keyed: setting a key twice keeps the last value
//! - `None` values are ignored, so optional filters can be passed directly
//! - [`with_body_field`](CloudflareRequest::with_body_field) sends the textual form of the value,
//!   [`with_body_json`](CloudflareRequest::with_body_json) keeps its JSON type
//! - `GET` requests never carry a body; other methods always send a JSON object
//!
//! ## Responses
//!
//! [`send`](CloudflareRequest::send) returns an [`ApiResponse`] around the
//! standard [`CloudflareResponse`] envelope. Non-2xx statuses are returned, not
//! raised: check [`ApiResponse::is_api_success`]. Use
//! [`send_as`](CloudflareRequest::send_as) for a typed body.
//!
//! ## Error Handling
//!
//! Every fallible operation returns a [`CloudflareError`]. Building a request
//! never fails; errors come from finalizing it or from the exchange.
//!
//! ## Transport
//!
//! Requests are sent synchronously through an [`HttpTransport`], by default a
//! blocking `reqwest` client ([`ReqwestTransport`]). Provide another
//! implementation with [`CloudflareAccessBuilder::with_transport`].

mod client;

pub use self::client::{
    ApiResponse, Authentication, AuthenticationError, CallBody, CallPath, CallQuery, Category,
    CloudflareAccess, CloudflareAccessBuilder, CloudflareError, CloudflareRequest,
    CloudflareResponse, DEFAULT_BASE_URL, HttpMethod, HttpTransport, PreparedRequest, RawResponse,
    ReqwestTransport, ResponseMessage, ResultInfo, SecureString,
};
