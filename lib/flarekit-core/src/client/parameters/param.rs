use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::CloudflareError;

/// Resolves a value given to a request mutator.
///
/// `None`, unit and anything else serializing to JSON `null` count as absent.
pub(in crate::client) fn resolve<T>(value: T) -> Option<Value>
where
    T: Serialize,
{
    match serde_json::to_value(value) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "failed to serialize parameter value, ignored");
            None
        }
    }
}

/// Textual form of a value, as sent for stringified body fields.
///
/// Strings are kept as is; other values use their JSON rendering
/// (`true`, `42`, `["a","b"]`).
pub(in crate::client) fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Textual form of a scalar, used for query parameters.
pub(in crate::client) fn scalar_to_string(value: &Value) -> Result<String, CloudflareError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => {
            Err(CloudflareError::UnsupportedQueryParameterValue {
                value: value.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_treat_none_as_absent() {
        assert_eq!(resolve(None::<&str>), None);
        assert_eq!(resolve(()), None);
        assert_eq!(resolve(Some("abc")), Some(json!("abc")));
        assert_eq!(resolve(42), Some(json!(42)));
    }

    #[test]
    fn should_stringify_scalars() {
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(3600)), "3600");
        assert_eq!(stringify(&json!("proxied")), "proxied");
        assert_eq!(stringify(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn should_reject_object_as_query_scalar() {
        let result = scalar_to_string(&json!({ "nested": 1 }));

        assert!(matches!(
            result,
            Err(CloudflareError::UnsupportedQueryParameterValue { .. })
        ));
    }
}
