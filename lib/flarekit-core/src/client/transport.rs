use std::fmt::Debug;
use std::time::Duration;

use http::{HeaderMap, StatusCode};
use url::Url;

use super::{CloudflareError, HttpMethod};

/// A finalized request, ready to be sent.
///
/// Produced by [`CloudflareRequest::build`](crate::CloudflareRequest::build); it is
/// immutable and holds everything the transport needs.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub(in crate::client) method: HttpMethod,
    pub(in crate::client) url: Url,
    pub(in crate::client) headers: HeaderMap,
    pub(in crate::client) body: Option<String>,
}

impl PreparedRequest {
    /// The HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The full URL, query string included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request headers, authentication included.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The serialized JSON body, always `None` for `GET`.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// The response as received from the transport, before deserialization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

/// The HTTP exchange used by [`CloudflareAccess`](crate::CloudflareAccess).
///
/// The default implementation is [`ReqwestTransport`]. Implementations must be
/// safe to share between threads; pooling, timeouts and TLS are their concern.
pub trait HttpTransport: Debug + Send + Sync {
    /// Sends the request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Any failure of the exchange itself (connection, timeout, body read).
    fn execute(&self, request: PreparedRequest) -> Result<RawResponse, CloudflareError>;
}

/// Blocking transport backed by [`reqwest::blocking::Client`].
///
/// Must not be used from inside an async runtime: `reqwest` blocking clients
/// start their own runtime.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Creates a client with the given timeout.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, CloudflareError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: PreparedRequest) -> Result<RawResponse, CloudflareError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method.into(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text()?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
