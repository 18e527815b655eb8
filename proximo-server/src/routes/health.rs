//! Liveness endpoint

use axum::{Router, routing::get};
use proximo_core::protocol::Health;

use crate::routes::{ApiResult, ok};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health
async fn health_check() -> ApiResult<Health> {
    ok(
        Health {
            status: "ok".into(),
            service: "proximo-server".into(),
        },
        "Health check successful",
    )
}
