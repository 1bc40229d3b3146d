use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::DatabaseError;

/// GET /api - static service description
pub async fn api_status() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Beneficios API",
            "version": version,
            "status": "online",
            "endpoints": {
                "list": "GET /api/beneficios?limit&skip&order",
                "show": "GET /api/beneficios/id/:id",
                "search": "GET /api/beneficios/nome/:filtro",
                "create": "POST /api/beneficios",
                "update": "PUT /api/beneficios",
                "delete": "DELETE /api/beneficios/:id",
                "health": "GET /health",
            }
        }
    }))
}

/// GET /health - storage connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.store.ping().await;
    if let Err(e) = &result {
        tracing::error!("health check failed: {}", e);
    }

    let (status, body) = health_report(result, crate::config::config().api.expose_error_details);
    (status, Json(body))
}

/// Driver error text is only included when `expose_details` is set
fn health_report(result: Result<(), DatabaseError>, expose_details: bool) -> (StatusCode, Value) {
    let now = chrono::Utc::now();

    match result {
        Ok(()) => (
            StatusCode::OK,
            json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            }),
        ),
        Err(e) => {
            let mut data = json!({
                "status": "degraded",
                "timestamp": now,
            });
            if expose_details {
                data["database_error"] = Value::String(e.to_string());
            }
            (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": data
                }),
            )
        }
    }
}
