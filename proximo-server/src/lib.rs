//! The proximo event service.
//!
//! Serves the `/api` routes the front end's `HttpRepository` talks to,
//! backed by an in-memory store.

pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::events::router())
        .merge(routes::auth::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
