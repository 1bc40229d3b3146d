use axum::extract::{Path, State};
use serde_json::Value;

use crate::api::format::beneficio_to_api_value;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::path_record_id;

/// GET /api/beneficios/id/:id - zero or one record, always as an array
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Vec<Value>> {
    let record_id = path_record_id(&id)?;
    let found = state.store.find_by_id(record_id).await?;

    Ok(ApiResponse::success(
        found.iter().map(beneficio_to_api_value).collect(),
    ))
}
