pub mod auth;
pub mod events;
pub mod health;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use proximo_core::error::ProximoError;
use proximo_core::protocol::ApiResponse;
use serde::Serialize;

/// Successful handler output, wrapped in the service envelope.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data, message)))
}

/// Convert proximo errors to HTTP responses
pub struct AppError(ProximoError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ProximoError::Validation(_) => StatusCode::BAD_REQUEST,
            ProximoError::Auth(_) => StatusCode::UNAUTHORIZED,
            ProximoError::NotFound(_) => StatusCode::NOT_FOUND,
            ProximoError::Network(_)
            | ProximoError::Service(_)
            | ProximoError::Config(_)
            | ProximoError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::warn!(%status, message = %self.0, "request rejected");
        }

        let body = Json(ApiResponse::<()>::failure(self.0.to_string()));
        (status, body).into_response()
    }
}

impl From<ProximoError> for AppError {
    fn from(err: ProximoError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ProximoError::Validation(rejection.body_text()))
    }
}
