//! Value-shape helpers for the normalization hook.

use serde_json::Value;

/// Whether a JSON value is iterable for rendering purposes. Both arrays
/// and objects count; objects keep their key structure through
/// normalization.
pub fn is_iterable(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Array-wrap contract: null becomes an empty sequence, an iterable passes
/// through unchanged, anything else becomes a one-element sequence.
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) | Value::Object(_) => value,
        scalar => Value::Array(vec![scalar]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_null_is_empty_sequence() {
        assert_eq!(wrap(Value::Null), json!([]));
    }

    #[test]
    fn test_wrap_scalar_is_single_element() {
        assert_eq!(wrap(json!(5)), json!([5]));
        assert_eq!(wrap(json!("x")), json!(["x"]));
        assert_eq!(wrap(json!(true)), json!([true]));
    }

    #[test]
    fn test_wrap_iterable_unchanged() {
        assert_eq!(wrap(json!([1, 2])), json!([1, 2]));
        assert_eq!(wrap(json!({"city": "X"})), json!({"city": "X"}));
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let once = wrap(json!(5));
        let twice = wrap(once.clone());
        assert_eq!(once, twice);
    }
}
