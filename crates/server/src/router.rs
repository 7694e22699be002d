use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The prefix under which the generation API is mounted.
pub const API_PREFIX: &str = "/api/v1";

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/generate-description",
            post(handlers::generate_description_handler),
        )
        .route("/generate-bulk", post(handlers::generate_bulk_handler));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest(API_PREFIX, api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
