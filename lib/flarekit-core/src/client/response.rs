use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::CloudflareError;
use super::transport::RawResponse;

/// HTTP-level envelope of a Cloudflare call: status, headers and the
/// deserialized payload.
///
/// Non-2xx statuses are not errors: Cloudflare reports failures inside the
/// JSON body, so the envelope is returned as is.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    raw_body: String,
    body: T,
}

impl<T> ApiResponse<T>
where
    T: DeserializeOwned,
{
    pub(in crate::client) fn from_raw(raw: RawResponse) -> Result<Self, CloudflareError> {
        let RawResponse {
            status,
            headers,
            body: raw_body,
        } = raw;

        let json = if raw_body.trim().is_empty() {
            "null"
        } else {
            raw_body.as_str()
        };
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        let body: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            CloudflareError::JsonError {
                path: err.path().to_string(),
                error: err.into_inner(),
                body: raw_body.clone(),
            }
        })?;

        Ok(Self {
            status,
            headers,
            raw_body,
            body,
        })
    }
}

impl<T> ApiResponse<T> {
    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The deserialized payload.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_body(self) -> T {
        self.body
    }

    /// The body text as received.
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }
}

impl<R> ApiResponse<CloudflareResponse<R>> {
    /// `true` when both the HTTP status and the Cloudflare `success` flag say so.
    pub fn is_api_success(&self) -> bool {
        self.is_success() && self.body.success
    }
}

/// The JSON envelope returned by every Cloudflare v4 endpoint.
///
/// `R` defaults to a raw [`serde_json::Value`]; use a concrete type to get a
/// typed `result`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloudflareResponse<R = serde_json::Value> {
    /// Whether the call succeeded.
    pub success: bool,
    /// Errors reported by the API.
    #[serde(default)]
    pub errors: Vec<ResponseMessage>,
    /// Informational messages.
    #[serde(default)]
    pub messages: Vec<ResponseMessage>,
    /// The payload, absent on most failures.
    pub result: Option<R>,
    /// Paging metadata for list endpoints.
    pub result_info: Option<ResultInfo>,
}

/// An error or message entry of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseMessage {
    /// Cloudflare error code.
    pub code: u32,
    /// Human readable message.
    pub message: String,
}

/// Paging metadata of list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResultInfo {
    /// Current page, 1-indexed.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Items on this page.
    #[serde(default)]
    pub count: Option<u32>,
    /// Items over all pages.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: Option<u32>,
}
