use headers::{ContentType, HeaderMapExt};
use http::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::CloudflareRequest;
use crate::client::transport::PreparedRequest;
use crate::client::{
    ApiResponse, Authentication, CallBody, CallPath, CallQuery, CloudflareError,
    CloudflareResponse, HttpMethod,
};

impl CloudflareRequest<'_> {
    /// Finalizes the request without sending it.
    ///
    /// The URL is the base URL joined with the resolved path, plus the query
    /// string when parameters are set. Unlike [`resolve_path`](Self::resolve_path),
    /// identifiers are percent-encoded so each stays a single path segment.
    /// `GET` requests never carry a body; other methods always send a JSON
    /// object, `{}` when no field is set.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - the resulting URL is invalid
    /// - a query parameter is a JSON object
    /// - the credentials cannot be turned into header values
    pub fn build(&self) -> Result<PreparedRequest, CloudflareError> {
        let url = Self::build_url(self.access.base_url(), &self.path, &self.query)?;
        let headers = Self::build_headers(
            self.access.user_agent.clone(),
            self.access.authentication(),
            self.method,
        )?;
        let body = Self::build_body(self.method, &self.body)?;

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }

    /// Sends the request and reads the standard Cloudflare envelope.
    ///
    /// A non-2xx status is not an error; check
    /// [`ApiResponse::is_api_success`] and the envelope `errors`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be built, the exchange fails, or the body is
    /// not a Cloudflare envelope.
    pub fn send(self) -> Result<ApiResponse<CloudflareResponse>, CloudflareError> {
        self.send_as()
    }

    /// Sends the request and deserializes the body into `T`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use flarekit_core::{CloudflareAccess, CloudflareResponse};
    /// use serde::Deserialize;
    ///
    /// #[derive(Debug, Deserialize)]
    /// struct Zone {
    ///     id: String,
    ///     name: String,
    /// }
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let access = CloudflareAccess::from_env()?;
    /// let zones = access
    ///     .get("zones")
    ///     .with_query_param("name", "example.com")
    ///     .send_as::<CloudflareResponse<Vec<Zone>>>()?
    ///     .into_body();
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be built, the exchange fails, or the body
    /// does not match `T`. [`CloudflareError::JsonError`] carries the JSON path
    /// of the mismatch and the raw body.
    pub fn send_as<T>(self) -> Result<ApiResponse<T>, CloudflareError>
    where
        T: DeserializeOwned,
    {
        debug!(
            method = %self.method,
            path = self.path.template(),
            identifiers = ?self.path.identifiers(),
            query = ?self.query,
            body = ?self.body,
            "sending..."
        );
        let request = self.build()?;
        let raw = self.access.transport.execute(request)?;
        debug!(status = %raw.status, length = raw.body.len(), "...receiving");

        ApiResponse::from_raw(raw)
    }

    /// Sends the request, then hands the response to `f`.
    ///
    /// `f` is not called when sending fails; the error is returned instead.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub fn send_then<F, R>(self, f: F) -> Result<R, CloudflareError>
    where
        F: FnOnce(ApiResponse<CloudflareResponse>) -> R,
    {
        self.send().map(f)
    }

    /// Sends the request, deserializes the body into `T`, then hands the
    /// response to `f`.
    ///
    /// # Errors
    ///
    /// Same as [`send_as`](Self::send_as).
    pub fn send_as_then<T, F, R>(self, f: F) -> Result<R, CloudflareError>
    where
        T: DeserializeOwned,
        F: FnOnce(ApiResponse<T>) -> R,
    {
        self.send_as().map(f)
    }

    pub(super) fn build_url(
        base_url: &Url,
        path: &CallPath,
        query: &CallQuery,
    ) -> Result<Url, CloudflareError> {
        let path = path.resolve_encoded();
        let url = format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            let query_string = query.to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    fn build_headers(
        user_agent: HeaderValue,
        authentication: Option<&Authentication>,
        method: HttpMethod,
    ) -> Result<HeaderMap, CloudflareError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        if let Some(authentication) = authentication {
            for (name, value) in authentication.to_headers()? {
                headers.insert(name, value);
            }
        }

        if method.has_body() {
            headers.typed_insert(ContentType::json());
        }

        Ok(headers)
    }

    fn build_body(method: HttpMethod, body: &CallBody) -> Result<Option<String>, CloudflareError> {
        match method {
            HttpMethod::Get => Ok(None),
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete => {
                body.to_json_string().map(Some)
            }
        }
    }
}
