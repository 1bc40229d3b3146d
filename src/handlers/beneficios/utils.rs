use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::database::{Document, RecordId};
use crate::error::ApiError;

/// Unwrap the JSON extractor, mapping rejections onto the error envelope
pub fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

/// Body as a document; only objects can be stored
pub fn into_document(body: Value) -> Result<Document, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::InvalidJson("expected a JSON object".to_string())),
    }
}

/// Identifier taken from a path segment
pub fn path_record_id(id: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(id).map_err(|_| ApiError::invalid_identifier(id, "params"))
}

/// Leading integer of `text`, ignoring leading whitespace: `"5abc"` is 5,
/// `"abc"` is `None`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_leading_integers() {
        assert_eq!(parse_leading_int("10"), Some(10));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("5abc"), Some(5));
        assert_eq!(parse_leading_int("2.9"), Some(2));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn only_objects_become_documents() {
        assert!(into_document(json!({ "nome": "x" })).is_ok());
        assert!(matches!(into_document(json!([1, 2])), Err(ApiError::InvalidJson(_))));
    }

    #[test]
    fn malformed_path_ids_are_invalid_identifiers() {
        assert!(matches!(
            path_record_id("123"),
            Err(ApiError::InvalidIdentifier { location: "params", .. })
        ));
        assert!(path_record_id("6b9f3c1e-8a2d-4c55-9e0f-1a2b3c4d5e6f").is_ok());
    }
}
