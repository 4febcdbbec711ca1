//! Request parameter types for building Cloudflare calls.
//!
//! - [`CallPath`] - Endpoint template with positional identifiers (`/zones/{id-1}`)
//! - [`CallQuery`] - Query string parameters
//! - [`CallBody`] - JSON request body

mod param;

mod path;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

mod body;
pub use self::body::CallBody;
