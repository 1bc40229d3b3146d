use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::database::{RecordId, UpdateResult};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::validation::{sanitize_beneficio, validate_beneficio};

use super::utils::{into_document, json_body};

/// PUT /api/beneficios - the body's `id` selects the record, the remaining
/// fields replace the stored ones
pub async fn put(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<UpdateResult> {
    let mut body = json_body(payload)?;
    let raw_id = body.get("id").cloned().unwrap_or(Value::Null);

    let errors = validate_beneficio(&body);
    if !errors.is_empty() {
        tracing::warn!("update rejected: {} validation error(s)", errors.len());
        return Err(ApiError::Validation(errors));
    }
    sanitize_beneficio(&mut body);

    let record_id = match &raw_id {
        Value::String(id) => RecordId::parse(id).ok(),
        _ => None,
    }
    .ok_or_else(|| ApiError::invalid_identifier(raw_id.clone(), "body"))?;

    let mut patch = into_document(body)?;
    patch.remove("id");

    let result = state.store.update(record_id, patch).await?;
    tracing::info!(
        "updated beneficio {} (matched={}, modified={})",
        record_id,
        result.matched_count,
        result.modified_count
    );

    Ok(ApiResponse::accepted(result))
}
