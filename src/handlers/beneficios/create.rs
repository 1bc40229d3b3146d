use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::database::InsertResult;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{sanitize_beneficio, validate_beneficio};

use super::utils::{into_document, json_body};

/// POST /api/beneficios - validate and insert a new record
pub async fn post(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<InsertResult> {
    let mut body = json_body(payload)?;

    let errors = validate_beneficio(&body);
    if !errors.is_empty() {
        tracing::warn!("create rejected: {} validation error(s)", errors.len());
        return Err(ApiError::Validation(errors));
    }
    sanitize_beneficio(&mut body);

    // Identifiers are assigned by the store, never taken from the client
    let mut document = into_document(body)?;
    document.remove("id");

    let result = state.store.insert(document).await?;
    tracing::info!("created beneficio {}", result.inserted_id);

    Ok(ApiResponse::created(result))
}
