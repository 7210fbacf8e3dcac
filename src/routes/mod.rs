//! Route modules for the Verse Index service

pub mod health;
pub mod scripture;
pub mod tags;
pub mod topics;
pub mod versions;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(versions::router())
        .merge(scripture::router())
        .merge(tags::router())
        .merge(topics::router())
}

/// Full application router with tracing and CORS
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
