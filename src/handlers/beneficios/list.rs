use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use crate::api::format::beneficios_to_api_values;
use crate::app::AppState;
use crate::database::ListOptions;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::parse_leading_int;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_SKIP: i64 = 0;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub skip: Option<String>,
    /// Accepted for compatibility; results always come back in natural order
    pub order: Option<String>,
}

impl ListQuery {
    /// `limit=0` means no limit; a negative limit counts by its absolute value.
    /// A negative skip is passed through and rejected by the store.
    pub fn to_options(&self) -> ListOptions {
        let limit = self
            .limit
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_LIMIT);
        let skip = self
            .skip
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_SKIP);

        ListOptions {
            limit: match limit {
                0 => None,
                n => Some(n.saturating_abs()),
            },
            skip,
        }
    }
}

/// GET /api/beneficios - list records with limit/skip pagination
pub async fn get(State(state): State<AppState>, Query(query): Query<ListQuery>) -> ApiResult<Vec<Value>> {
    if let Some(order) = &query.order {
        tracing::debug!("order={:?} ignored; listing in natural order", order);
    }

    let options = query.to_options();
    let records = state.store.list(options).await?;
    tracing::debug!("listed {} beneficios ({:?})", records.len(), options);

    Ok(ApiResponse::success(beneficios_to_api_values(&records)))
}
