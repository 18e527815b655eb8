//! Authentication endpoints

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use proximo_core::repository::AuthService;
use proximo_core::session::{LoginRequest, Session, SignupRequest};

use crate::routes::{ApiResult, ok};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
}

/// POST /api/login - Check credentials and return the session
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Session> {
    let Json(request) = payload?;
    let session = state.repo().login(request).await?;
    tracing::info!(identity = %session.identity, role = %session.role, "login");
    ok(session, "Login successful")
}

/// POST /api/signup - Register an account and sign it in
async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Session> {
    let Json(request) = payload?;
    let session = state.repo().signup(request).await?;
    tracing::info!(identity = %session.identity, role = %session.role, "signup");
    ok(session, "Account created")
}
