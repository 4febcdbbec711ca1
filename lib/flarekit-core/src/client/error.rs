use super::auth::AuthenticationError;

/// Errors that can occur when building or sending a Cloudflare request.
///
/// Request mutators never fail: every variant comes from finalizing the request
/// (URL, headers, query string) or from the exchange itself.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum CloudflareError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    ///
    /// Occurs when the user agent contains characters not allowed in headers.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Credentials cannot be turned into request headers.
    AuthenticationError(AuthenticationError),

    /// JSON serialization error, usually while rendering the request body.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Invalid base URL configuration.
    #[display("Invalid base URL '{url}': {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Description of why the URL is invalid.
        error: String,
    },

    /// No usable credentials in the environment.
    #[display("Missing Cloudflare credentials: {message}")]
    #[from(skip)]
    MissingCredentials {
        /// What was looked up.
        message: String,
    },

    /// JSON response deserialization failure.
    ///
    /// Occurs when the response body cannot be parsed as the expected JSON structure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// Location inside the document where deserialization failed.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Query parameter value type is not supported.
    ///
    /// Occurs when a JSON object is used as a query parameter.
    #[display(
        "Unsupported query parameter value: objects are not supported for query parameters. Got: {value}"
    )]
    #[from(skip)]
    UnsupportedQueryParameterValue {
        /// The unsupported value that was provided.
        value: serde_json::Value,
    },
}
