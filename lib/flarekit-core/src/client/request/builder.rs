use serde::Serialize;

use super::CloudflareRequest;
use crate::client::{CallBody, CallPath, CallQuery, Category, CloudflareAccess, HttpMethod};

impl<'a> CloudflareRequest<'a> {
    /// Creates a request for `method` on the `path` template.
    pub fn new(method: HttpMethod, path: impl Into<CallPath>, access: &'a CloudflareAccess) -> Self {
        Self {
            access,
            method,
            path: path.into(),
            query: CallQuery::default(),
            body: CallBody::default(),
        }
    }

    /// Creates the request described by `category`.
    pub fn from_category(category: Category, access: &'a CloudflareAccess) -> Self {
        Self::new(category.method(), category.path(), access)
    }

    // =============================================================================
    // Path
    // =============================================================================

    /// Appends identifiers for the `{id-N}` placeholders, in iteration order.
    ///
    /// Identifiers accumulate across calls: after `with_identifiers(["a"])` and
    /// `with_identifiers(["b"])`, `{id-2}` is replaced by `b`.
    pub fn with_identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = self.path.add_identifiers(identifiers);
        self
    }

    /// Appends one identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.path = self.path.add_identifier(identifier);
        self
    }

    // =============================================================================
    // Query
    // =============================================================================

    /// Sets a query parameter, unless `value` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flarekit_core::CloudflareAccess;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let access = CloudflareAccess::builder().build()?;
    /// let name: Option<&str> = None;
    ///
    /// let request = access
    ///     .get("zones")
    ///     .with_query_param("per_page", 50)
    ///     .with_query_param("name", name); // ignored
    ///
    /// assert_eq!(request.query().len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_query_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        self.query = self.query.add_param(name, value);
        self
    }

    /// Sets every query parameter of `params`, in iteration order.
    pub fn with_query_params<I, K, T>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Serialize,
    {
        params
            .into_iter()
            .fold(self, |request, (name, value)| {
                request.with_query_param(name, value)
            })
    }

    // =============================================================================
    // Body
    // =============================================================================

    /// Sets a body field to the textual form of `value`, unless it is absent.
    ///
    /// Numbers and booleans are sent as JSON strings (`true` becomes `"true"`);
    /// use [`with_body_json`](Self::with_body_json) to keep the JSON type.
    /// Arrays and objects are rendered as compact JSON text, so
    /// `vec!["a", "b"]` is sent as the string `["a","b"]`.
    pub fn with_body_field<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        self.body = self.body.add_field(name, value);
        self
    }

    /// Sets a body field to a structured JSON value, unless it is absent.
    pub fn with_body_json<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        self.body = self.body.add_json(name, value);
        self
    }

    /// Sets every field of `fields` with [`with_body_field`](Self::with_body_field).
    pub fn with_body_fields<I, K, T>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Serialize,
    {
        fields
            .into_iter()
            .fold(self, |request, (name, value)| {
                request.with_body_field(name, value)
            })
    }

    // =============================================================================
    // Accessors
    // =============================================================================

    /// The HTTP method, fixed at construction.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path template and its identifiers.
    pub fn path(&self) -> &CallPath {
        &self.path
    }

    /// The path with every known identifier substituted verbatim.
    ///
    /// No encoding is applied here; [`build`](Self::build) encodes identifiers
    /// in the request URL.
    pub fn resolve_path(&self) -> String {
        self.path.resolve()
    }

    /// The query parameters.
    pub fn query(&self) -> &CallQuery {
        &self.query
    }

    /// The body fields.
    pub fn body(&self) -> &CallBody {
        &self.body
    }
}
