use std::sync::Arc;

use http::HeaderValue;
use url::Url;

mod builder;
pub use self::builder::{CloudflareAccessBuilder, DEFAULT_BASE_URL};

mod request;
pub use self::request::CloudflareRequest;

mod parameters;
pub use self::parameters::{CallBody, CallPath, CallQuery};

mod method;
pub use self::method::HttpMethod;

mod category;
pub use self::category::Category;

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod transport;
pub use self::transport::{HttpTransport, PreparedRequest, RawResponse, ReqwestTransport};

mod response;
pub use self::response::{ApiResponse, CloudflareResponse, ResponseMessage, ResultInfo};

mod error;
pub use self::error::CloudflareError;

/// Connection context shared by every request: base URL, credentials and the
/// HTTP transport.
///
/// Requests borrow the access, so it must outlive them. It is cheap to clone
/// and can be shared between threads.
///
/// # Example
///
/// ```rust,no_run
/// use flarekit_core::{Category, CloudflareAccess};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let access = CloudflareAccess::builder()
///     .with_api_token("my-api-token")
///     .build()?;
///
/// let response = access
///     .request(Category::ListDnsRecords)
///     .with_identifier("023e105f4ecef8ad9ca31a8372d0c353")
///     .with_query_param("type", "A")
///     .send()?;
///
/// if response.is_api_success() {
///     println!("{:?}", response.body().result);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudflareAccess {
    base_url: Url,
    authentication: Option<Authentication>,
    user_agent: HeaderValue,
    transport: Arc<dyn HttpTransport>,
}

// Create
impl CloudflareAccess {
    /// Starts a [`CloudflareAccessBuilder`].
    pub fn builder() -> CloudflareAccessBuilder {
        CloudflareAccessBuilder::default()
    }

    /// Builds an access configured from the environment.
    ///
    /// See [`CloudflareAccessBuilder::with_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Fails when no credentials are set or the configuration is invalid.
    pub fn from_env() -> Result<Self, CloudflareError> {
        Self::builder().with_env()?.build()
    }
}

// Accessors
impl CloudflareAccess {
    /// The base URL endpoint paths are relative to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured credentials.
    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    /// The shared transport.
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }
}

// Requests
impl CloudflareAccess {
    /// Starts a request with an explicit method and path template.
    pub fn call(&self, method: HttpMethod, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        CloudflareRequest::new(method, path, self)
    }

    /// Starts the request described by `category`.
    pub fn request(&self, category: Category) -> CloudflareRequest<'_> {
        CloudflareRequest::from_category(category, self)
    }

    /// Starts a `GET` request.
    pub fn get(&self, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        self.call(HttpMethod::Get, path)
    }

    /// Starts a `POST` request.
    pub fn post(&self, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        self.call(HttpMethod::Post, path)
    }

    /// Starts a `PUT` request.
    pub fn put(&self, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        self.call(HttpMethod::Put, path)
    }

    /// Starts a `PATCH` request.
    pub fn patch(&self, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        self.call(HttpMethod::Patch, path)
    }

    /// Starts a `DELETE` request.
    pub fn delete(&self, path: impl Into<CallPath>) -> CloudflareRequest<'_> {
        self.call(HttpMethod::Delete, path)
    }
}
