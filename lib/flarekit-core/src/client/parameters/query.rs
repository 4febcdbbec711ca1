use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::param::{resolve, scalar_to_string};
use crate::client::CloudflareError;

/// Query string parameters of a request.
///
/// Keys are unique: adding a parameter twice keeps the last value. Absent values
/// (`None`) are ignored. Arrays are sent form style, the name repeated for
/// every item (`?status=active&status=pending`).
///
/// # Examples
///
/// ```rust
/// use flarekit_core::CallQuery;
///
/// let query = CallQuery::new()
///     .add_param("name", "example.com")
///     .add_param("per_page", 50)
///     .add_param("status", None::<&str>);
///
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallQuery {
    params: IndexMap<String, Value>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, unless the value is absent.
    pub fn add_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Serialize,
    {
        if let Some(value) = resolve(value) {
            self.params.insert(name.into(), value);
        }
        self
    }

    /// Returns `true` when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// The value of a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(in crate::client) fn to_query_string(&self) -> Result<String, CloudflareError> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (name, value) in &self.params {
            if let Value::Array(items) = value {
                for item in items {
                    pairs.push((name.as_str(), scalar_to_string(item)?));
                }
            } else {
                pairs.push((name.as_str(), scalar_to_string(value)?));
            }
        }

        serde_urlencoded::to_string(&pairs).map_err(CloudflareError::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_ignore_absent_values() {
        let query = CallQuery::new().add_param("name", None::<String>);

        assert!(query.is_empty());
    }

    #[test]
    fn should_keep_last_value() {
        let query = CallQuery::new()
            .add_param("name", "first.com")
            .add_param("name", "second.com");

        assert_eq!(query.len(), 1);
        assert_eq!(query.get("name"), Some(&json!("second.com")));
    }

    #[test]
    fn should_not_remove_existing_value_on_absent() {
        let query = CallQuery::new()
            .add_param("page", 2)
            .add_param("page", None::<u32>);

        assert_eq!(query.get("page"), Some(&json!(2)));
    }

    #[test]
    fn should_encode_query_string() {
        let query = CallQuery::new()
            .add_param("name", "example.com")
            .add_param("match", "all")
            .add_param("per_page", 50)
            .add_param("proxied", true)
            .add_param("comment", "a b&c");

        let query_string = query.to_query_string().expect("valid query");

        insta::assert_snapshot!(query_string, @"name=example.com&match=all&per_page=50&proxied=true&comment=a+b%26c");
    }

    #[test]
    fn should_repeat_array_values() {
        let query = CallQuery::new().add_param("status", vec!["active", "pending"]);

        let query_string = query.to_query_string().expect("valid query");

        assert_eq!(query_string, "status=active&status=pending");
    }

    #[test]
    fn should_reject_object_values() {
        let query = CallQuery::new().add_param("filter", json!({ "type": "A" }));

        let result = query.to_query_string();

        assert!(matches!(
            result,
            Err(CloudflareError::UnsupportedQueryParameterValue { .. })
        ));
    }
}
