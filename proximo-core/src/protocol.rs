//! The JSON envelope spoken by the event service.
//!
//! Every response is `{ success, data?, error?, message? }`. Failures carry
//! a human-readable `error` that the front end shows verbatim.

use serde::{Deserialize, Serialize};

use crate::error::{ProximoError, ProximoResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// `#[serde(default)]` on a generic field would require `T: Default`.
fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Unwrap the envelope. A failure payload becomes `ProximoError::Service`;
    /// callers that know the HTTP status refine it further.
    pub fn into_result(self) -> ProximoResult<T> {
        if !self.success {
            return Err(ProximoError::Service(
                self.error
                    .unwrap_or_else(|| "The event service reported a failure".to_string()),
            ));
        }

        self.data.ok_or_else(|| {
            ProximoError::Serialization("Response is missing its data field".to_string())
        })
    }
}

/// Acknowledgment returned by `DELETE /api/events/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: String,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
}
