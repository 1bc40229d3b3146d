// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::database::DatabaseError;

/// One entry of the error envelope. Every failing route answers with
/// `{"errors": [ErrorDetail, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub value: Value,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorDetail {
    /// Failure tied to a request body field
    pub fn body(param: impl Into<String>, value: Value, msg: impl Into<String>) -> Self {
        Self {
            value,
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
            detail: None,
        }
    }

    /// Failure tied to a path parameter
    pub fn params(param: impl Into<String>, value: Value, msg: impl Into<String>) -> Self {
        Self {
            value,
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("params".to_string()),
            detail: None,
        }
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(Vec<ErrorDetail>),
    InvalidJson(String),

    // 404 Not Found
    NotFound(ErrorDetail),

    // 500 Internal Server Error
    InvalidIdentifier { value: Value, location: &'static str },
    Storage(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidIdentifier { .. } | ApiError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_identifier(value: impl Into<Value>, location: &'static str) -> Self {
        ApiError::InvalidIdentifier {
            value: value.into(),
            location,
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound(ErrorDetail::params(
            "id",
            Value::String(id.into()),
            "Nenhum benefício encontrado com o id informado",
        ))
    }

    /// Flatten into the list of entries carried by the envelope
    pub fn details(&self) -> Vec<ErrorDetail> {
        match self {
            ApiError::Validation(errors) => errors.clone(),
            ApiError::InvalidJson(msg) => vec![ErrorDetail {
                value: Value::Null,
                msg: "Corpo da requisição inválido".to_string(),
                param: None,
                location: Some("body".to_string()),
                detail: Some(msg.clone()),
            }],
            ApiError::NotFound(detail) => vec![detail.clone()],
            ApiError::InvalidIdentifier { value, location } => vec![ErrorDetail {
                value: value.clone(),
                msg: "Identificador inválido".to_string(),
                param: Some("id".to_string()),
                location: Some(location.to_string()),
                detail: None,
            }],
            ApiError::Storage(msg) => {
                let detail = crate::config::config()
                    .api
                    .expose_error_details
                    .then(|| msg.clone());
                vec![ErrorDetail {
                    value: Value::Null,
                    msg: "Erro ao acessar a base de benefícios".to_string(),
                    param: None,
                    location: None,
                    detail,
                }]
            }
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "errors": self.details() })
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::InvalidIdentifier(value) => {
                ApiError::invalid_identifier(value, "params")
            }
            other => {
                // Log the real error; the body only carries it in development
                tracing::error!("Storage error: {}", other);
                ApiError::Storage(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "{} validation error(s)", errors.len()),
            ApiError::InvalidJson(msg) => write!(f, "invalid JSON body: {}", msg),
            ApiError::NotFound(detail) => write!(f, "not found: {}", detail.value),
            ApiError::InvalidIdentifier { value, .. } => write!(f, "invalid identifier: {}", value),
            ApiError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
