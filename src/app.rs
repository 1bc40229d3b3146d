use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::BeneficioStore;
use crate::handlers::{beneficios, root};

/// Shared by every request. The store is created once at startup and only
/// read through this handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BeneficioStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BeneficioStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let mut app = Router::new()
        .route("/api", get(root::api_status))
        .route("/health", get(root::health))
        .merge(beneficio_routes())
        // Anything else is looked up in the public directory (favicon, index.html)
        .fallback_service(ServeDir::new(&config.server.public_dir))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn beneficio_routes() -> Router<AppState> {
    let collection = get(beneficios::beneficio_list)
        .post(beneficios::beneficio_create)
        .put(beneficios::beneficio_update);

    Router::new()
        .route("/api/beneficios", collection.clone())
        .route("/api/beneficios/", collection)
        .route("/api/beneficios/id/:id", get(beneficios::beneficio_show))
        .route("/api/beneficios/nome/:filtro", get(beneficios::beneficio_search))
        .route("/api/beneficios/:id", delete(beneficios::beneficio_delete))
}
