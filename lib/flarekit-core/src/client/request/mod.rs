use super::{CallBody, CallPath, CallQuery, CloudflareAccess, HttpMethod};

mod builder;
mod execution;

/// Builder for one Cloudflare API call.
///
/// A request is created from a [`CloudflareAccess`] with a method and a path
/// template (or a [`Category`](crate::Category)), configured through a chain of
/// `with_*` calls, then consumed by one of the `send` methods.
///
/// # Method Groups
///
/// ## Path
/// - [`with_identifiers(ids)`](Self::with_identifiers) - Append identifiers for `{id-N}` placeholders
/// - [`with_identifier(id)`](Self::with_identifier) - Append one identifier
///
/// ## Query string
/// - [`with_query_param(name, value)`](Self::with_query_param) - Set one parameter
/// - [`with_query_params(entries)`](Self::with_query_params) - Set several parameters
///
/// ## Body (ignored for `GET`)
/// - [`with_body_field(name, value)`](Self::with_body_field) - Set a field to the textual form of a value
/// - [`with_body_json(name, value)`](Self::with_body_json) - Set a field to a structured JSON value
/// - [`with_body_fields(entries)`](Self::with_body_fields) - Set several textual fields
///
/// ## Execution
/// - [`build()`](Self::build) - Finalize into a [`PreparedRequest`](crate::PreparedRequest)
/// - [`send()`](Self::send) - Send and read the generic [`CloudflareResponse`](crate::CloudflareResponse)
/// - [`send_as::<T>()`](Self::send_as) - Send and deserialize into `T`
/// - [`send_then(f)`](Self::send_then), [`send_as_then::<T>(f)`](Self::send_as_then) - Send and hand the response to `f`
///
/// Absent values (`None`) given to query and body methods are ignored.
///
/// # Example
///
/// ```rust,no_run
/// use flarekit_core::{CloudflareAccess, HttpMethod};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let access = CloudflareAccess::from_env()?;
///
/// let response = access
///     .call(HttpMethod::Patch, "zones/{id-1}/dns_records/{id-2}")
///     .with_identifiers(["023e105f4ecef8ad9ca31a8372d0c353", "372e67954025e0ba6aaa6d586b9e0b59"])
///     .with_body_json("proxied", true)
///     .with_body_json("ttl", 3600)
///     .send()?;
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct CloudflareRequest<'a> {
    #[debug(skip)]
    access: &'a CloudflareAccess,

    method: HttpMethod,
    path: CallPath,
    query: CallQuery,
    body: CallBody,
}
