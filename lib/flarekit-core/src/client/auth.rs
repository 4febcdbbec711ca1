use std::fmt;

use http::{HeaderName, HeaderValue};
use reqwest::header::AUTHORIZATION;
use zeroize::{Zeroize, ZeroizeOnDrop};

const X_AUTH_EMAIL: HeaderName = HeaderName::from_static("x-auth-email");
const X_AUTH_KEY: HeaderName = HeaderName::from_static("x-auth-key");
const X_AUTH_USER_SERVICE_KEY: HeaderName = HeaderName::from_static("x-auth-user-service-key");

/// Errors that can occur while turning credentials into request headers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// API token contains invalid characters for HTTP headers.
    #[display("API token contains invalid characters: {message}")]
    InvalidApiToken {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// Account email contains invalid characters for HTTP headers.
    #[display("Account email contains invalid characters: {message}")]
    InvalidEmail {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// API key or service key contains invalid characters for HTTP headers.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Description of the invalid characters or format issue.
        message: String,
    },
}

/// Secure wrapper for sensitive string data that automatically zeroes memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn mask_sensitive(value: &str) -> String {
        if value.len() <= 8 {
            "***".to_string()
        } else {
            let head = value.get(..4).unwrap_or_default();
            let tail = value.get(value.len() - 4..).unwrap_or_default();
            format!("{head}...{tail}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Credentials accepted by the Cloudflare API.
///
/// # Examples
///
/// ```rust
/// use flarekit_core::Authentication;
///
/// // Scoped API token (recommended)
/// let auth = Authentication::ApiToken("my-api-token".into());
///
/// // Legacy global API key
/// let auth = Authentication::ApiKey {
///     email: "admin@example.com".to_string(),
///     key: "global-api-key".into(),
/// };
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Authentication {
    /// Scoped API token, sent as `Authorization: Bearer <token>`.
    ApiToken(SecureString),

    /// Legacy global API key, sent as `X-Auth-Email` and `X-Auth-Key`.
    ApiKey {
        /// The account email.
        email: String,
        /// The global API key.
        key: SecureString,
    },

    /// Origin CA service key, sent as `X-Auth-User-Service-Key`.
    UserServiceKey(SecureString),
}

impl Authentication {
    /// Converts the authentication into HTTP headers.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` if a credential contains characters that
    /// cannot appear in an HTTP header.
    pub fn to_headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>, AuthenticationError> {
        match self {
            Self::ApiToken(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .map_err(|err| AuthenticationError::InvalidApiToken {
                        message: err.to_string(),
                    })?;
                value.set_sensitive(true);
                Ok(vec![(AUTHORIZATION, value)])
            }
            Self::ApiKey { email, key } => {
                let email = HeaderValue::from_str(email).map_err(|err| {
                    AuthenticationError::InvalidEmail {
                        message: err.to_string(),
                    }
                })?;
                let key = Self::sensitive_value(key)?;
                Ok(vec![(X_AUTH_EMAIL, email), (X_AUTH_KEY, key)])
            }
            Self::UserServiceKey(key) => {
                let key = Self::sensitive_value(key)?;
                Ok(vec![(X_AUTH_USER_SERVICE_KEY, key)])
            }
        }
    }

    fn sensitive_value(key: &SecureString) -> Result<HeaderValue, AuthenticationError> {
        let mut value = HeaderValue::from_str(key.as_str()).map_err(|err| {
            AuthenticationError::InvalidApiKey {
                message: err.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken(_) => f.debug_tuple("ApiToken").field(&"[REDACTED]").finish(),
            Self::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("key", &"[REDACTED]")
                .finish(),
            Self::UserServiceKey(_) => f
                .debug_tuple("UserServiceKey")
                .field(&"[REDACTED]")
                .finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken(token) => write!(f, "ApiToken {token}"),
            Self::ApiKey { email, key } => write!(f, "ApiKey ({email}: {key})"),
            Self::UserServiceKey(key) => write!(f, "UserServiceKey {key}"),
        }
    }
}
