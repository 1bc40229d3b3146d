use axum::extract::{Path, State};
use serde_json::Value;

use crate::api::format::beneficios_to_api_values;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/beneficios/nome/:filtro - substring match on `nome`, ignoring case and accents
pub async fn get(State(state): State<AppState>, Path(filtro): Path<String>) -> ApiResult<Vec<Value>> {
    let records = state.store.search_by_nome(&filtro).await?;
    tracing::debug!("nome filter {:?} matched {} beneficios", filtro, records.len());

    Ok(ApiResponse::success(beneficios_to_api_values(&records)))
}
