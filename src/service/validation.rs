//! Presence checks for form submissions.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Form-style truthiness: absent, null, `false`, `0` and `""` all count as missing.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Fails on the first field in `required` (in order) that is not truthy.
    pub fn require(body: &Map<String, Value>, required: &[&'static str]) -> Result<(), AppError> {
        for field in required {
            if !is_truthy(body.get(*field)) {
                tracing::warn!(field = %field, "submission rejected: missing required field");
                return Err(AppError::MissingField(*field));
            }
        }
        Ok(())
    }
}

pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Text form of a submitted value. Lists are joined with ", ".
pub fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(as_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

pub fn text_field(body: &Map<String, Value>, field: &str) -> String {
    body.get(field).map(as_text).unwrap_or_default()
}

/// `None` only when the field is absent or null.
pub fn optional_text_field(body: &Map<String, Value>, field: &str) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(v) => Some(as_text(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_are_missing() {
        for v in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            assert!(!is_truthy(Some(&v)), "{v} should be falsy");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn truthy_values_are_present() {
        for v in [json!(true), json!(1), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(Some(&v)), "{v} should be truthy");
        }
    }

    #[test]
    fn require_reports_first_missing_in_order() {
        let body = body_to_map(json!({ "a": "1", "c": "" })).unwrap();
        let err = RequestValidator::require(&body, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, AppError::MissingField("b")));
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(matches!(body_to_map(json!([1, 2])), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn text_rendering_of_submitted_values() {
        assert_eq!(as_text(&json!(5)), "5");
        assert_eq!(as_text(&json!(["Laptops", "Internet"])), "Laptops, Internet");
        assert_eq!(as_text(&json!(true)), "true");
    }

    #[test]
    fn optional_text_keeps_zero() {
        let body = body_to_map(json!({ "n": 0, "z": null })).unwrap();
        assert_eq!(optional_text_field(&body, "n").as_deref(), Some("0"));
        assert_eq!(optional_text_field(&body, "z"), None);
        assert_eq!(optional_text_field(&body, "missing"), None);
    }
}
