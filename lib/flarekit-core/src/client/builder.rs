use std::env;
use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tracing::debug;
use url::Url;

use super::transport::{HttpTransport, ReqwestTransport};
use super::{Authentication, CloudflareAccess, CloudflareError};

/// Base URL of the Cloudflare v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4/";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
const ENV_BASE_URL: &str = "CLOUDFLARE_API_BASE_URL";

/// Builder for [`CloudflareAccess`].
///
/// # Default Configuration
///
/// - **Base URL**: `https://api.cloudflare.com/client/v4/`
/// - **Authentication**: None
/// - **User agent**: `flarekit-core/<version>`
/// - **Timeout**: 60 seconds (only used by the default transport)
/// - **Transport**: [`ReqwestTransport`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use flarekit_core::CloudflareAccess;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let access = CloudflareAccess::builder()
///     .with_api_token("my-api-token")
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudflareAccessBuilder {
    base_url: Option<Url>,
    authentication: Option<Authentication>,
    user_agent: String,
    timeout: Duration,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for CloudflareAccessBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            authentication: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl CloudflareAccessBuilder {
    /// Builds the [`CloudflareAccess`].
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - the default base URL cannot be parsed
    /// - the user agent is not a valid header value
    /// - the default transport cannot be created
    pub fn build(self) -> Result<CloudflareAccess, CloudflareError> {
        let Self {
            base_url,
            authentication,
            user_agent,
            timeout,
            transport,
        } = self;

        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let user_agent = HeaderValue::from_str(&user_agent)?;
        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeout(timeout)?),
        };

        debug!(%base_url, ?authentication, "Cloudflare access ready");
        Ok(CloudflareAccess {
            base_url,
            authentication,
            user_agent,
            transport,
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// - `CLOUDFLARE_API_TOKEN`: API token, preferred when set
    /// - `CLOUDFLARE_EMAIL` and `CLOUDFLARE_API_KEY`: legacy global API key
    /// - `CLOUDFLARE_API_BASE_URL`: optional base URL override
    ///
    /// # Errors
    ///
    /// Returns [`CloudflareError::MissingCredentials`] when no credentials are
    /// set, or [`CloudflareError::InvalidBaseUrl`] for a malformed override.
    pub fn with_env(self) -> Result<Self, CloudflareError> {
        let lookup = |key: &str| env::var(key).ok().filter(|value| !value.is_empty());
        self.with_lookup(lookup)
    }

    fn with_lookup<F>(self, lookup: F) -> Result<Self, CloudflareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = if let Some(token) = lookup(ENV_API_TOKEN) {
            self.with_api_token(token)
        } else if let (Some(email), Some(key)) = (lookup(ENV_EMAIL), lookup(ENV_API_KEY)) {
            self.with_api_key(email, key)
        } else {
            return Err(CloudflareError::MissingCredentials {
                message: format!("set {ENV_API_TOKEN}, or {ENV_EMAIL} and {ENV_API_KEY}"),
            });
        };

        match lookup(ENV_BASE_URL) {
            Some(url) => builder.with_base_url(&url),
            None => Ok(builder),
        }
    }

    /// Sets the base URL all endpoint paths are relative to.
    ///
    /// # Errors
    ///
    /// Returns [`CloudflareError::InvalidBaseUrl`] if the URL cannot be parsed
    /// or cannot have a path (e.g. `mailto:`).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, CloudflareError> {
        let url = Url::parse(base_url).map_err(|err| CloudflareError::InvalidBaseUrl {
            url: base_url.to_string(),
            error: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(CloudflareError::InvalidBaseUrl {
                url: base_url.to_string(),
                error: "cannot be a base URL".to_string(),
            });
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the credentials sent with every request.
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Authenticates with a scoped API token.
    pub fn with_api_token(self, token: impl Into<String>) -> Self {
        self.with_authentication(Authentication::ApiToken(token.into().into()))
    }

    /// Authenticates with the account email and the global API key.
    pub fn with_api_key(self, email: impl Into<String>, key: impl Into<String>) -> Self {
        self.with_authentication(Authentication::ApiKey {
            email: email.into(),
            key: key.into().into(),
        })
    }

    /// Authenticates with an Origin CA service key.
    pub fn with_user_service_key(self, key: impl Into<String>) -> Self {
        self.with_authentication(Authentication::UserServiceKey(key.into().into()))
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the timeout of the default transport.
    ///
    /// Ignored when a custom transport is given with [`with_transport`](Self::with_transport).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the default reqwest transport.
    pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Replaces the default reqwest transport with a shared one.
    pub fn with_shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}
