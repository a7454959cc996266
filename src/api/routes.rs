//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, state::AppState};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard shell
        .route("/", get(handlers::home))

        // League views
        .route("/api/team-overview", get(handlers::team_overview))
        .route("/api/top-performers", get(handlers::top_performers))
        .route("/api/projections", get(handlers::projections))
        .route("/api/league-info", get(handlers::league_info))
        .route("/api/matchups", get(handlers::matchups))

        // Co-manager chat
        .route("/api/chat", post(handlers::chat))

        // Health
        .route("/health", get(handlers::health))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
