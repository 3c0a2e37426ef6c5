use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::request_context::RequestContext;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api_v1 = Router::new().nest("/items", crate::api::routes::item_routes::item_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Unknown paths answer with the standard 404 envelope
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404(State(state): State<AppState>, ctx: RequestContext) -> Response {
    state
        .responder
        .not_found(&ctx, Some("The requested resource was not found"))
}
