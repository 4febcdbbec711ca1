use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::param::{resolve, stringify};
use crate::client::CloudflareError;

/// The JSON object sent as request body.
///
/// Two ways to add a field:
/// - [`add_field`](Self::add_field) stores the textual form of the value
///   (`true` is sent as `"true"`), the contract of the historical client;
/// - [`add_json`](Self::add_json) stores the JSON value as is.
///
/// Absent values are ignored, keys are unique and insertion order is kept.
///
/// # Examples
///
/// ```rust
/// use flarekit_core::CallBody;
/// use serde_json::json;
///
/// let body = CallBody::new()
///     .add_field("enabled", true)
///     .add_json("ttl", 3600);
///
/// assert_eq!(body.to_json_string()?, r#"{"enabled":"true","ttl":3600}"#);
/// # Ok::<(), flarekit_core::CloudflareError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CallBody {
    fields: IndexMap<String, Value>,
}

impl CallBody {
    /// Creates an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to the textual form of `value`, unless the value is absent.
    pub fn add_field<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        if let Some(value) = resolve(value) {
            self.fields
                .insert(name.into(), Value::String(stringify(&value)));
        }
        self
    }

    /// Sets a field to a structured JSON value, unless the value is absent.
    pub fn add_json<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        if let Some(value) = resolve(value) {
            self.fields.insert(name.into(), value);
        }
        self
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Renders the body as compact JSON text.
    ///
    /// # Errors
    ///
    /// Fails only if serde_json cannot render the object.
    pub fn to_json_string(&self) -> Result<String, CloudflareError> {
        let json = serde_json::to_string(&self.fields)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_stringify_scalar_fields() {
        let body = CallBody::new()
            .add_field("enabled", true)
            .add_field("ttl", 120)
            .add_field("type", "A");

        insta::assert_snapshot!(body.to_json_string().expect("valid json"), @r#"{"enabled":"true","ttl":"120","type":"A"}"#);
    }

    #[test]
    fn should_keep_structured_fields() {
        let body = CallBody::new()
            .add_json("files", vec!["https://example.com/a.css"])
            .add_json("value", json!({ "min_tls": "1.2" }))
            .add_json("proxied", false);

        insta::assert_snapshot!(body.to_json_string().expect("valid json"), @r#"{"files":["https://example.com/a.css"],"value":{"min_tls":"1.2"},"proxied":false}"#);
    }

    #[test]
    fn should_ignore_absent_values() {
        let body = CallBody::new()
            .add_field("name", None::<&str>)
            .add_json("data", None::<Value>)
            .add_json("other", Value::Null);

        assert!(body.is_empty());
        assert_eq!(body.to_json_string().expect("valid json"), "{}");
    }

    #[test]
    fn should_keep_last_value_in_place() {
        let body = CallBody::new()
            .add_field("name", "first")
            .add_field("type", "A")
            .add_field("name", "second");

        assert_eq!(body.len(), 2);
        assert_eq!(
            body.to_json_string().expect("valid json"),
            r#"{"name":"second","type":"A"}"#
        );
    }
}
