use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::DeleteResult;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::path_record_id;

/// DELETE /api/beneficios/:id - remove one record; 404 when nothing was deleted
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<DeleteResult> {
    let record_id = path_record_id(&id)?;
    let result = state.store.delete(record_id).await?;

    if result.deleted_count == 0 {
        tracing::warn!("delete: no beneficio with id {}", record_id);
        return Err(ApiError::not_found(id));
    }

    tracing::info!("deleted beneficio {}", record_id);
    Ok(ApiResponse::success(result))
}
